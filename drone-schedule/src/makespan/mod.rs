//! Contains makespan minimization algorithms: tours are assigned to identical drones.

#[cfg(test)]
#[path = "../../tests/unit/makespan/assignment_test.rs"]
mod assignment_test;

mod exact;
pub use self::exact::*;

mod lpt;
pub use self::lpt::*;

use drone_tours::core::prelude::GenericResult;

/// Keeps tours assigned to each drone.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// Tour indices per drone.
    pub jobs: Vec<Vec<usize>>,
    /// Total duration of assigned tours per drone.
    pub bins: Vec<f64>,
}

impl Assignment {
    /// Creates an assignment from drone index chosen for each tour.
    pub fn from_drones(number_of_drones: usize, drones: &[usize], durations: &[f64]) -> Self {
        let mut jobs = vec![Vec::new(); number_of_drones];
        let mut bins = vec![0.; number_of_drones];

        drones.iter().zip(durations.iter()).enumerate().for_each(|(job, (&drone, &duration))| {
            jobs[drone].push(job);
            bins[drone] += duration;
        });

        Self { jobs, bins }
    }

    /// Returns the time when the last drone finishes.
    pub fn makespan(&self) -> f64 {
        self.bins.iter().copied().fold(0., f64::max)
    }
}

/// Assigns tours with given durations to drones.
pub trait Scheduler: Send + Sync {
    /// Returns an assignment where every tour is served by exactly one drone.
    fn assign(&self, number_of_drones: usize, durations: &[f64]) -> GenericResult<Assignment>;
}

fn validate_input(number_of_drones: usize, durations: &[f64]) -> GenericResult<()> {
    if number_of_drones == 0 {
        return Err("number of drones must be positive".into());
    }

    if let Some((idx, duration)) = durations.iter().enumerate().find(|(_, d)| !d.is_finite() || **d < 0.) {
        return Err(format!("tour {idx} has invalid duration: {duration}").into());
    }

    Ok(())
}

/// Returns the trivial lower bound of makespan: the longest tour or the average load.
fn get_lower_bound(number_of_drones: usize, durations: &[f64]) -> f64 {
    let longest = durations.iter().copied().fold(0., f64::max);
    let average = durations.iter().sum::<f64>() / number_of_drones as f64;

    longest.max(average)
}
