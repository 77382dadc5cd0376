#[cfg(test)]
#[path = "../../tests/unit/commands/plan_test.rs"]
mod plan_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use drone_cli::create_environment;
use drone_schedule::sweep::{sweep_fleet_sizes, write_schedule_report};
use drone_tours::core::utils::Timer;
use drone_tours::plan_tours;
use drone_tours::tours::write_tours_report;
use std::path::Path;

const GRID_ARG_NAME: &str = "GRID";
const OUT_DIR_ARG_NAME: &str = "out-dir";

pub fn get_plan_app() -> Command {
    Command::new("plan")
        .about("Builds tours and schedules for every configured capacity scenario")
        .arg(Arg::new(GRID_ARG_NAME).help("Sets the population grid file to use (GeoJSON)").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Specifies directory where results are written")
                .long(OUT_DIR_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_plan(matches: &ArgMatches) -> GenericResult<()> {
    let config = get_config(matches)?;

    let grid_path = matches.get_one::<String>(GRID_ARG_NAME).ok_or("grid file path is not specified")?;
    let out_dir = Path::new(matches.get_one::<String>(OUT_DIR_ARG_NAME).ok_or("output directory is not specified")?);
    std::fs::create_dir_all(out_dir)?;

    let termination = config.termination_params();
    let with_logging = is_logging_enabled(matches, &config);
    let environment = create_environment(with_logging, None);
    let logger = environment.logger.clone();

    let (grid, matrix) = read_grid_with_matrix(grid_path, &config, environment.as_ref())?;
    let scheduler = config.create_scheduler();
    let strategy = config.schedule.strategy.name();

    config.fleet.scenarios.iter().try_for_each(|scenario| {
        let timer = Timer::start();
        let suffix = format!("capacity_{}_{}", scenario.capacity, scenario.max_point_demand);

        (logger)(format!("planning scenario: {suffix}").as_str());

        let environment = create_environment(with_logging, termination.max_time);
        let report = plan_tours(&grid, &matrix, &config.fleet_params(scenario), &termination, environment)?;
        write_tours_report(create_out_buffer(out_dir, format!("{suffix}.json").as_str())?, &report)?;

        let schedule =
            sweep_fleet_sizes(&report, &config.duration_params(), scheduler.as_ref(), config.fleet_sizes(), &logger)?;
        let schedule_file = format!("schedule_{strategy}_{suffix}.json");
        write_schedule_report(create_out_buffer(out_dir, schedule_file.as_str())?, &schedule)?;

        (logger)(format!("scenario {suffix} is planned in {}ms", timer.elapsed_millis()).as_str());

        Ok(())
    })
}

fn create_out_buffer(out_dir: &Path, file_name: &str) -> GenericResult<BufWriter<Box<dyn Write>>> {
    let path = out_dir.join(file_name);

    create_file(path.to_string_lossy().as_ref(), "out").map(|file| create_write_buffer(Some(file)))
}
