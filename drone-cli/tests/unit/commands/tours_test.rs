use super::*;
use drone_tours::tours::ToursReportReader;
use tempfile::{NamedTempFile, tempdir};

const GRID_PATH: &str = "../data/grid.geojson";

fn read_report(path: &std::path::Path) -> drone_tours::tours::ToursReport {
    BufReader::new(File::open(path).unwrap()).read_tours_report().unwrap()
}

#[test]
fn can_build_tours_with_generation_limit() {
    let out = NamedTempFile::new().unwrap();
    let out_path = out.path().to_str().unwrap();
    let args = vec!["tours", GRID_PATH, "--capacity", "50", "--max-generations", "5", "-o", out_path];
    let matches = get_tours_app().try_get_matches_from(args).unwrap();

    run_tours(&matches, create_write_buffer).unwrap();

    let report = read_report(out.path());
    assert_eq!(report.capacity, 50);
    assert_eq!(report.max_point_demand, 20);
    assert_eq!(report.total_load, 175);
    assert!(report.unassigned.is_empty());
    assert!(report.routes.iter().all(|route| route.load <= 50));
}

#[test]
fn can_write_geojson_and_distance_cache() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("tours.json");
    let geojson_path = dir.path().join("tours.geojson");
    let cache_path = dir.path().join("cache").join("matrix.json");
    let args = vec![
        "tours",
        GRID_PATH,
        "--max-point-demand",
        "10",
        "-n",
        "5",
        "-o",
        out_path.to_str().unwrap(),
        "-g",
        geojson_path.to_str().unwrap(),
        "--distance-cache",
        cache_path.to_str().unwrap(),
    ];
    let matches = get_tours_app().try_get_matches_from(args).unwrap();

    run_tours(&matches, create_write_buffer).unwrap();

    assert!(geojson_path.exists());
    assert!(cache_path.exists());
    assert_eq!(read_report(out_path.as_path()).max_point_demand, 10);
}

#[test]
fn can_limit_max_point_demand_by_capacity() {
    let matches = get_tours_app().try_get_matches_from(vec!["tours", GRID_PATH, "--capacity", "10"]).unwrap();

    let scenario = get_scenario(&matches, &Config::default()).unwrap();

    assert_eq!(scenario, ScenarioConfig { capacity: 10, max_point_demand: 10 });
}

#[test]
fn can_reject_invalid_capacity() {
    let matches = get_tours_app().try_get_matches_from(vec!["tours", GRID_PATH, "--capacity", "abc"]).unwrap();

    assert!(run_tours(&matches, create_write_buffer).is_err());
}

#[test]
fn can_reject_missing_grid_file() {
    let args = vec!["tours", "../data/not_existing.geojson", "-n", "1"];
    let matches = get_tours_app().try_get_matches_from(args).unwrap();

    let result = run_tours(&matches, create_write_buffer);

    assert!(result.err().map(|err| err.to_string()).is_some_and(|err| err.starts_with("cannot open grid file")));
}

#[test]
fn can_require_grid_path() {
    assert!(get_tours_app().try_get_matches_from(vec!["tours"]).is_err());
}
