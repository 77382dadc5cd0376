
use crate::durations::DurationParams;
use drone_tours::grid::DemandPoint;
use drone_tours::tours::{TourRoute, ToursReport};

/// Drone flies 10 m/s and spends 900s at each stop.
pub fn create_test_params() -> DurationParams {
    DurationParams { speed_km_h: 36., stop_time_minutes: 15. }
}

pub fn create_test_route(stops: &[(f64, f64, i32)], distance: f64) -> TourRoute {
    let points = stops.iter().map(|&(lon, lat, population)| DemandPoint { lon, lat, population }).collect::<Vec<_>>();

    TourRoute::new(points.iter(), distance)
}

/// Creates a report with tours which have a single stop and given distances.
pub fn create_test_report(distances: &[f64]) -> ToursReport {
    let routes = distances
        .iter()
        .enumerate()
        .map(|(idx, &distance)| create_test_route(&[(16., 58., 0), (16. + (idx + 1) as f64 / 100., 58., 5)], distance))
        .collect();

    ToursReport::new(10, 5, routes, vec![])
}

/// Checks that every job is assigned exactly once and bins match assigned durations.
pub fn assert_valid_assignment(assignment: &crate::makespan::Assignment, number_of_drones: usize, durations: &[f64]) {
    assert_eq!(assignment.jobs.len(), number_of_drones);
    assert_eq!(assignment.bins.len(), number_of_drones);

    let mut jobs = assignment.jobs.iter().flatten().copied().collect::<Vec<_>>();
    jobs.sort();
    assert_eq!(jobs, (0..durations.len()).collect::<Vec<_>>());

    assignment.jobs.iter().zip(assignment.bins.iter()).for_each(|(jobs, &bin)| {
        let expected = jobs.iter().map(|&job| durations[job]).sum::<f64>();
        assert!((expected - bin).abs() < 1E-6);
    });
}
