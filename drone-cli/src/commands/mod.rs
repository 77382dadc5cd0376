use clap::ArgMatches;
use drone_cli::config::{Config, read_config};
use drone_tours::core::prelude::{Environment, GenericResult};
use drone_tours::distances::{DistanceMatrix, load_or_create_matrix};
use drone_tours::grid::{PopulationGrid, PopulationGridReader};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

pub mod assign;
pub mod plan;
pub mod tours;

pub(crate) const CONFIG_ARG_NAME: &str = "config";
pub(crate) const LOG_ARG_NAME: &str = "log";

/// Creates a function which returns a writer for the output.
pub(crate) type OutWriterFn = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_value<T: FromStr>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> GenericResult<Option<T>>
where
    T::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(arg_name)
        .map(|arg| arg.parse::<T>().map_err(|err| format!("cannot parse {arg_desc}: '{err}'").into()).map(Some))
        .unwrap_or(Ok(None))
}

/// Reads config from the file given by argument or returns default one.
fn get_config(matches: &ArgMatches) -> GenericResult<Config> {
    matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

fn is_logging_enabled(matches: &ArgMatches, config: &Config) -> bool {
    matches.get_flag(LOG_ARG_NAME) || config.logging.enabled
}

/// Reads population grid and creates distance matrix between its points.
fn read_grid_with_matrix(
    grid_path: &str,
    config: &Config,
    environment: &Environment,
) -> GenericResult<(PopulationGrid, DistanceMatrix)> {
    let grid = BufReader::new(open_file(grid_path, "grid")?)
        .read_population_grid(config.grid.depot, config.grid.population_property.as_str())?;

    (environment.logger)(
        format!("grid has {} populated points with total demand {}", grid.points.len() - 1, grid.total_demand()).as_str(),
    );

    let points = grid.points.iter().map(|point| point.location()).collect::<Vec<_>>();
    let matrix = load_or_create_matrix(points.as_slice(), config.grid.distance_cache.as_deref(), &environment.logger)?;

    Ok((grid, matrix))
}
