#[cfg(test)]
#[path = "../../tests/unit/commands/tours_test.rs"]
mod tours_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use drone_cli::config::ScenarioConfig;
use drone_cli::create_environment;
use drone_tours::plan_tours;
use drone_tours::tours::{write_tours_geojson, write_tours_report};

const GRID_ARG_NAME: &str = "GRID";
const CAPACITY_ARG_NAME: &str = "capacity";
const MAX_POINT_DEMAND_ARG_NAME: &str = "max-point-demand";
const TIME_ARG_NAME: &str = "max-time";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const DISTANCE_CACHE_ARG_NAME: &str = "distance-cache";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";

pub fn get_tours_app() -> Command {
    Command::new("tours")
        .about("Builds capacitated drone tours which serve population of the grid")
        .arg(Arg::new(GRID_ARG_NAME).help("Sets the population grid file to use (GeoJSON)").required(true).index(1))
        .arg(
            Arg::new(CAPACITY_ARG_NAME)
                .help("Specifies drone capacity")
                .long(CAPACITY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_POINT_DEMAND_ARG_NAME)
                .help("Specifies max demand of a single point, denser points are split")
                .long(MAX_POINT_DEMAND_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of routing solver in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DISTANCE_CACHE_ARG_NAME)
                .help("Specifies path to the distance matrix cache")
                .long(DISTANCE_CACHE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for tours output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to the file for tours output in geojson format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_tours(matches: &ArgMatches, out_writer_func: OutWriterFn) -> GenericResult<()> {
    let mut config = get_config(matches)?;

    // command line arguments override config values
    let scenario = get_scenario(matches, &config)?;
    if let Some(max_time) = parse_value::<usize>(matches, TIME_ARG_NAME, "max time")? {
        config.termination.max_time = Some(max_time);
    }
    if let Some(max_generations) = parse_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")? {
        config.termination.max_generations = Some(max_generations);
    }
    if let Some(cache) = matches.get_one::<String>(DISTANCE_CACHE_ARG_NAME) {
        config.grid.distance_cache = Some(cache.into());
    }

    let grid_path = matches.get_one::<String>(GRID_ARG_NAME).ok_or("grid file path is not specified")?;
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out tours"));
    let out_geojson = matches.get_one::<String>(GEO_JSON_ARG_NAME).map(|path| create_file(path, "out geojson"));

    let termination = config.termination_params();
    let with_logging = is_logging_enabled(matches, &config);

    let matrix_environment = create_environment(with_logging, None);
    let (grid, matrix) = read_grid_with_matrix(grid_path, &config, matrix_environment.as_ref())?;

    let environment = create_environment(with_logging, termination.max_time);
    let report = plan_tours(&grid, &matrix, &config.fleet_params(&scenario), &termination, environment)?;

    write_tours_report(out_writer_func(out_result.transpose()?), &report)?;

    if let Some(out_geojson) = out_geojson.transpose()? {
        write_tours_geojson(create_write_buffer(Some(out_geojson)), &report)?;
    }

    Ok(())
}

/// Returns the first configured scenario with values overridden by arguments.
fn get_scenario(matches: &ArgMatches, config: &Config) -> GenericResult<ScenarioConfig> {
    let default =
        config.fleet.scenarios.first().cloned().unwrap_or(ScenarioConfig { capacity: 100, max_point_demand: 20 });

    let capacity = parse_value::<i32>(matches, CAPACITY_ARG_NAME, "capacity")?.unwrap_or(default.capacity);
    let max_point_demand = parse_value::<i32>(matches, MAX_POINT_DEMAND_ARG_NAME, "max point demand")?
        .unwrap_or(default.max_point_demand.min(capacity));

    Ok(ScenarioConfig { capacity, max_point_demand })
}
