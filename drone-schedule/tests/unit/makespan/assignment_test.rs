use super::*;

#[test]
fn can_create_assignment_from_drones() {
    let assignment = Assignment::from_drones(3, &[1, 0, 1], &[5., 4., 3.]);

    assert_eq!(assignment.jobs, vec![vec![1], vec![0, 2], vec![]]);
    assert_eq!(assignment.bins, vec![4., 8., 0.]);
    assert_eq!(assignment.makespan(), 8.);
}

#[test]
fn can_get_zero_makespan_without_jobs() {
    let assignment = Assignment::from_drones(2, &[], &[]);

    assert_eq!(assignment.makespan(), 0.);
}

parameterized_test! {can_get_lower_bound, (number_of_drones, durations, expected), {
    assert_eq!(get_lower_bound(number_of_drones, durations.as_slice()), expected);
}}

can_get_lower_bound! {
    case01_average: (2, vec![3., 3., 2., 2., 2.], 6.),
    case02_longest: (3, vec![10., 1., 1.], 10.),
    case03_empty: (2, Vec::<f64>::new(), 0.),
}

parameterized_test! {can_validate_input, (number_of_drones, durations, is_valid), {
    assert_eq!(validate_input(number_of_drones, durations.as_slice()).is_ok(), is_valid);
}}

can_validate_input! {
    case01_valid: (2, vec![1., 0.], true),
    case02_no_tours: (1, Vec::<f64>::new(), true),
    case03_no_drones: (0, vec![1.], false),
    case04_negative: (2, vec![1., -1.], false),
    case05_infinite: (2, vec![f64::INFINITY], false),
}
