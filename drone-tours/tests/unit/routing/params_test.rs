use super::*;

#[test]
fn can_use_default_timing() {
    let fleet = FleetParams::new(100, 20);

    assert_eq!(fleet.max_stops(), 48);
    assert_eq!(fleet.reserve_vehicles, 20);
    assert_eq!(fleet.vehicles, None);
}

parameterized_test! {can_calculate_max_stops, (stop_time_minutes, operating_day_hours, expected), {
    let fleet = FleetParams { stop_time_minutes, operating_day_hours, ..FleetParams::new(100, 20) };

    assert_eq!(fleet.max_stops(), expected);
}}

can_calculate_max_stops! {
    case01_default: (15., 12., 48),
    case02_rounds_up: (7., 1., 9),
    case03_long_stops: (60., 2., 2),
    case04_short_day: (15., 0.5, 2),
}

parameterized_test! {can_estimate_fleet_size, (capacity, vehicles, jobs, total_demand, expected), {
    let fleet = FleetParams { vehicles, ..FleetParams::new(capacity, 20) };

    assert_eq!(fleet.fleet_size(jobs, total_demand), expected);
}}

can_estimate_fleet_size! {
    case01_by_demand: (100, None, 10, 1000, 30),
    case02_by_stops: (100, None, 97, 100, 23),
    case03_explicit: (100, Some(5), 97, 1000, 5),
    case04_empty: (100, None, 0, 0, 20),
}

parameterized_test! {can_validate_params, (capacity, max_point_demand, vehicles, is_valid), {
    let fleet = FleetParams { vehicles, ..FleetParams::new(capacity, max_point_demand) };

    assert_eq!(fleet.validate().is_ok(), is_valid);
}}

can_validate_params! {
    case01_valid: (100, 20, None, true),
    case02_demand_equal_capacity: (20, 20, Some(3), true),
    case03_zero_capacity: (0, 20, None, false),
    case04_demand_exceeds_capacity: (10, 20, None, false),
    case05_zero_demand: (10, 0, None, false),
    case06_zero_vehicles: (10, 5, Some(0), false),
}

#[test]
fn can_reject_invalid_timing() {
    let fleet = FleetParams { stop_time_minutes: 0., ..FleetParams::new(100, 20) };

    assert!(fleet.validate().is_err());
}

#[test]
fn can_use_default_termination() {
    let termination = TerminationParams::default();

    assert_eq!(termination.max_time, Some(4800));
    assert_eq!(termination.max_generations, None);
}
