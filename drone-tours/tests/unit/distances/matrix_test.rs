use super::*;

fn get_points() -> Vec<GeoPoint> {
    vec![GeoPoint::new(16.1788, 58.5633), GeoPoint::new(16.20, 58.57), GeoPoint::new(16.15, 58.60)]
}

#[test]
fn can_create_symmetric_matrix_from_points() {
    let points = get_points();

    let matrix = DistanceMatrix::from_points(points.as_slice());

    assert_eq!(matrix.size(), 3);
    (0..3).for_each(|from| {
        assert_eq!(matrix.distance(from, from), 0.);
        (0..3).for_each(|to| assert_eq!(matrix.distance(from, to), matrix.distance(to, from)));
    });
    assert_eq!(matrix.distance(0, 1), geodesic_distance(&points[0], &points[1]));
}

#[test]
fn can_expand_matrix_by_origins() {
    let matrix = DistanceMatrix::new(3, vec![0., 1., 2., 1., 0., 3., 2., 3., 0.]).unwrap();

    let expanded = matrix.expand(&[0, 1, 1, 2]);

    assert_eq!(expanded.size(), 4);
    assert_eq!(expanded.values(), &[0., 1., 1., 2., 1., 0., 0., 3., 1., 0., 0., 3., 2., 3., 3., 0.]);
}

#[test]
fn can_calculate_path_distance() {
    let matrix = DistanceMatrix::new(3, vec![0., 1., 2., 1., 0., 3., 2., 3., 0.]).unwrap();

    assert_eq!(matrix.path_distance(&[0, 1, 2, 0]), 6.);
    assert_eq!(matrix.path_distance(&[0]), 0.);
}

#[test]
fn can_reject_non_square_matrix() {
    let result = DistanceMatrix::new(2, vec![0., 1., 1.]);

    assert_eq!(result.err().map(|err| err.to_string()), Some("non-square flatten matrix: 3 items for size 2".to_string()));
}
