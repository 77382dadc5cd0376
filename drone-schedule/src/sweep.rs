//! Computes assignments for a range of fleet sizes.

#[cfg(test)]
#[path = "../tests/unit/sweep_test.rs"]
mod sweep_test;

use crate::durations::{DurationParams, tour_durations};
use crate::makespan::Scheduler;
use drone_tours::core::prelude::{GenericResult, InfoLogger};
use drone_tours::core::utils::Timer;
use drone_tours::tours::{TourRoute, ToursReport};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;

/// Default minimum amount of drones.
pub const DEFAULT_MIN_DRONES: usize = 1;
/// Default maximum amount of drones.
pub const DEFAULT_MAX_DRONES: usize = 99;

/// Keeps assignment of tours for a fleet of the given size.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FleetAssignment {
    /// Amount of drones in the fleet.
    pub number_of_drones: usize,
    /// Tour indices per drone.
    pub jobs_assignment: Vec<Vec<usize>>,
    /// Working time in seconds per drone.
    pub bins: Vec<f64>,
    /// Working time of the busiest drone.
    pub makespan: f64,
    /// Tours per drone.
    pub routes: Vec<Vec<TourRoute>>,
}

/// Keeps assignments for all fleet sizes together with tours.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScheduleReport {
    /// Assignments ordered by increasing fleet size.
    pub assignments: Vec<FleetAssignment>,
    /// Scheduled tours.
    pub all_routes: ToursReport,
}

/// Assigns tours of the report to fleets of every size in the range. Fleet sizes are processed in parallel.
pub fn sweep_fleet_sizes(
    report: &ToursReport,
    params: &DurationParams,
    scheduler: &dyn Scheduler,
    fleet_sizes: RangeInclusive<usize>,
    logger: &InfoLogger,
) -> GenericResult<ScheduleReport> {
    params.validate()?;

    if *fleet_sizes.start() == 0 || fleet_sizes.is_empty() {
        return Err(format!("invalid fleet size range: {}..={}", fleet_sizes.start(), fleet_sizes.end()).into());
    }

    let durations = tour_durations(report, params);
    let timer = Timer::start();

    let assignments = fleet_sizes
        .into_par_iter()
        .map(|number_of_drones| -> GenericResult<FleetAssignment> {
            let assignment = scheduler.assign(number_of_drones, durations.as_slice())?;
            let makespan = assignment.makespan();

            (logger)(format!("{number_of_drones} drones: makespan {makespan:.0}s").as_str());

            let routes = assignment
                .jobs
                .iter()
                .map(|jobs| jobs.iter().map(|&job| report.routes[job].clone()).collect())
                .collect();

            Ok(FleetAssignment {
                number_of_drones,
                jobs_assignment: assignment.jobs,
                bins: assignment.bins,
                makespan,
                routes,
            })
        })
        .collect::<GenericResult<Vec<_>>>()?;

    (logger)(
        format!("{} tours assigned to {} fleets in {}ms", durations.len(), assignments.len(), timer.elapsed_millis())
            .as_str(),
    );

    Ok(ScheduleReport { assignments, all_routes: report.clone() })
}

/// Writes schedule report as json.
pub fn write_schedule_report<W: Write>(writer: BufWriter<W>, report: &ScheduleReport) -> GenericResult<()> {
    serde_json::to_writer(writer, report).map_err(|err| format!("cannot write schedule report: '{err}'").into())
}

#[derive(Serialize)]
struct MakespanRecord {
    number_of_drones: usize,
    makespan: f64,
}

/// Writes fleet size and makespan pairs as csv.
pub fn write_makespan_csv<W: Write>(writer: BufWriter<W>, report: &ScheduleReport) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    report.assignments.iter().try_for_each(|assignment| {
        writer
            .serialize(MakespanRecord { number_of_drones: assignment.number_of_drones, makespan: assignment.makespan })
            .map_err(|err| format!("cannot write csv: '{err}'"))
    })?;

    writer.flush().map_err(From::from)
}
