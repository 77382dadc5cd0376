use super::*;
use drone_schedule::sweep::ScheduleReport;
use drone_tours::grid::DemandPoint;
use drone_tours::tours::{TourRoute, ToursReport, write_tours_report};
use tempfile::{NamedTempFile, tempdir};

fn create_tours_file() -> NamedTempFile {
    let depot = DemandPoint { lon: 16.1788, lat: 58.5633, population: 0 };
    let routes = [6000., 4000., 3000., 2000.]
        .iter()
        .enumerate()
        .map(|(idx, &distance)| {
            let stop = DemandPoint { lon: 16.18 + idx as f64 / 100., lat: 58.56, population: 10 };
            TourRoute::new([depot, stop].iter(), distance)
        })
        .collect();
    let report = ToursReport::new(100, 20, routes, vec![]);

    let file = NamedTempFile::new().unwrap();
    write_tours_report(BufWriter::new(file.reopen().unwrap()), &report).unwrap();

    file
}

fn read_schedule(path: &std::path::Path) -> ScheduleReport {
    serde_json::from_reader(BufReader::new(File::open(path).unwrap())).unwrap()
}

#[test]
fn can_assign_tours_with_lpt() {
    let tours = create_tours_file();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("schedule.json");
    let csv_path = dir.path().join("schedule.csv");
    let args = vec![
        "assign",
        tours.path().to_str().unwrap(),
        "--strategy",
        "lpt",
        "--max-drones",
        "3",
        "-o",
        out_path.to_str().unwrap(),
        "--csv",
        csv_path.to_str().unwrap(),
    ];
    let matches = get_assign_app().try_get_matches_from(args).unwrap();

    run_assign(&matches, create_write_buffer).unwrap();

    let schedule = read_schedule(out_path.as_path());
    assert_eq!(schedule.assignments.iter().map(|a| a.number_of_drones).collect::<Vec<_>>(), vec![1, 2, 3]);
    // durations: 1260, 1140, 1080, 1020
    assert!((schedule.assignments[0].makespan - 4500.).abs() < 1E-6);
    assert_eq!(schedule.all_routes.number_of_drones_used, 4);
    let csv = std::fs::read_to_string(csv_path).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.starts_with("number_of_drones,makespan\n1,"));
}

#[test]
fn can_assign_tours_with_exact_strategy() {
    let tours = create_tours_file();
    let out = NamedTempFile::new().unwrap();
    let args = vec![
        "assign",
        tours.path().to_str().unwrap(),
        "--strategy",
        "exact",
        "--absolute-gap",
        "0",
        "--time-limit",
        "10",
        "--min-drones",
        "2",
        "--max-drones",
        "2",
        "-o",
        out.path().to_str().unwrap(),
    ];
    let matches = get_assign_app().try_get_matches_from(args).unwrap();

    run_assign(&matches, create_write_buffer).unwrap();

    let schedule = read_schedule(out.path());
    assert_eq!(schedule.assignments.len(), 1);
    assert!((schedule.assignments[0].makespan - 2280.).abs() < 1E-6);
}

#[test]
fn can_override_schedule_config() {
    let args = vec!["assign", "tours.json", "--absolute-gap", "5", "--time-limit", "7", "--min-drones", "3"];
    let matches = get_assign_app().try_get_matches_from(args).unwrap();
    let mut config = Config::default();

    override_schedule_config(&matches, &mut config).unwrap();

    assert_eq!(config.schedule.strategy, StrategyConfig::Exact { absolute_gap: 5., time_limit: Some(7.) });
    assert_eq!(config.fleet_sizes(), 3..=99);
}

#[test]
fn can_reject_unknown_strategy() {
    assert!(get_assign_app().try_get_matches_from(vec!["assign", "tours.json", "--strategy", "ip"]).is_err());
}

#[test]
fn can_reject_invalid_fleet_range() {
    let tours = create_tours_file();
    let args = vec!["assign", tours.path().to_str().unwrap(), "--min-drones", "5", "--max-drones", "2"];
    let matches = get_assign_app().try_get_matches_from(args).unwrap();

    assert!(run_assign(&matches, create_write_buffer).is_err());
}
