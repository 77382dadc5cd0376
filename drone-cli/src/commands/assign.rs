#[cfg(test)]
#[path = "../../tests/unit/commands/assign_test.rs"]
mod assign_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use drone_cli::config::StrategyConfig;
use drone_cli::create_logger;
use drone_schedule::sweep::{sweep_fleet_sizes, write_makespan_csv, write_schedule_report};
use drone_tours::tours::ToursReportReader;

const TOURS_ARG_NAME: &str = "TOURS";
const STRATEGY_ARG_NAME: &str = "strategy";
const MIN_DRONES_ARG_NAME: &str = "min-drones";
const MAX_DRONES_ARG_NAME: &str = "max-drones";
const ABSOLUTE_GAP_ARG_NAME: &str = "absolute-gap";
const TIME_LIMIT_ARG_NAME: &str = "time-limit";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const CSV_ARG_NAME: &str = "csv";

pub fn get_assign_app() -> Command {
    Command::new("assign")
        .about("Assigns tours to drone fleets of different size minimizing makespan")
        .arg(Arg::new(TOURS_ARG_NAME).help("Sets the tours report file to use").required(true).index(1))
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Specifies assignment algorithm")
                .long(STRATEGY_ARG_NAME)
                .value_parser(["exact", "lpt"])
                .required(false),
        )
        .arg(
            Arg::new(MIN_DRONES_ARG_NAME)
                .help("Specifies minimum fleet size")
                .long(MIN_DRONES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_DRONES_ARG_NAME)
                .help("Specifies maximum fleet size")
                .long(MAX_DRONES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ABSOLUTE_GAP_ARG_NAME)
                .help("Specifies accepted absolute gap to optimal makespan in seconds for exact algorithm")
                .long(ABSOLUTE_GAP_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_LIMIT_ARG_NAME)
                .help("Specifies time limit in seconds of exact algorithm for a single fleet size")
                .long(TIME_LIMIT_ARG_NAME)
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
                .help("Specifies path to the file for schedule output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CSV_ARG_NAME)
                .help("Specifies path to the file for makespan per fleet size in csv format")
                .long(CSV_ARG_NAME)
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

pub fn run_assign(matches: &ArgMatches, out_writer_func: OutWriterFn) -> GenericResult<()> {
    let mut config = get_config(matches)?;
    override_schedule_config(matches, &mut config)?;

    let tours_path = matches.get_one::<String>(TOURS_ARG_NAME).ok_or("tours file path is not specified")?;
    let report = BufReader::new(open_file(tours_path, "tours")?).read_tours_report()?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out schedule"));
    let out_csv = matches.get_one::<String>(CSV_ARG_NAME).map(|path| create_file(path, "out csv"));

    let logger = create_logger(is_logging_enabled(matches, &config));
    let scheduler = config.create_scheduler();

    let schedule =
        sweep_fleet_sizes(&report, &config.duration_params(), scheduler.as_ref(), config.fleet_sizes(), &logger)?;

    write_schedule_report(out_writer_func(out_result.transpose()?), &schedule)?;

    if let Some(out_csv) = out_csv.transpose()? {
        write_makespan_csv(create_write_buffer(Some(out_csv)), &schedule)?;
    }

    Ok(())
}

fn override_schedule_config(matches: &ArgMatches, config: &mut Config) -> GenericResult<()> {
    let schedule = &mut config.schedule;

    match matches.get_one::<String>(STRATEGY_ARG_NAME).map(String::as_str) {
        Some("lpt") => schedule.strategy = StrategyConfig::Lpt,
        Some("exact") if schedule.strategy == StrategyConfig::Lpt => schedule.strategy = StrategyConfig::default(),
        _ => {}
    }

    if let StrategyConfig::Exact { absolute_gap, time_limit } = &mut schedule.strategy {
        if let Some(value) = parse_value::<f64>(matches, ABSOLUTE_GAP_ARG_NAME, "absolute gap")? {
            *absolute_gap = value;
        }
        if let Some(value) = parse_value::<f64>(matches, TIME_LIMIT_ARG_NAME, "time limit")? {
            *time_limit = Some(value);
        }
    }

    if let Some(min_drones) = parse_value::<usize>(matches, MIN_DRONES_ARG_NAME, "min drones")? {
        schedule.min_drones = min_drones;
    }
    if let Some(max_drones) = parse_value::<usize>(matches, MAX_DRONES_ARG_NAME, "max drones")? {
        schedule.max_drones = max_drones;
    }

    Ok(())
}
