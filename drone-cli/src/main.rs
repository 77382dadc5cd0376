//! A command line interface to plan drone delivery tours over a population grid and assign
//! them to a drone fleet.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use clap::{ArgMatches, Command};
use commands::assign::{get_assign_app, run_assign};
use commands::plan::{get_plan_app, run_plan};
use commands::tours::{get_tours_app, run_tours};
use commands::create_write_buffer;
use drone_tours::core::prelude::GenericResult;
use std::process;

fn get_app() -> Command {
    Command::new("Drone Delivery Planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to plan drone delivery tours and schedules")
        .subcommand(get_tours_app())
        .subcommand(get_assign_app())
        .subcommand(get_plan_app())
}

fn run_subcommand(arg_matches: ArgMatches) -> GenericResult<()> {
    match arg_matches.subcommand() {
        Some(("tours", tours_matches)) => run_tours(tours_matches, create_write_buffer),
        Some(("assign", assign_matches)) => run_assign(assign_matches, create_write_buffer),
        Some(("plan", plan_matches)) => run_plan(plan_matches),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'").into()),
        None => Err("no subcommand was used. Use -h to print help information".into()),
    }
}

fn main() {
    if let Err(err) = run_subcommand(get_app().get_matches()) {
        eprintln!("{err}");
        process::exit(1);
    }
}
