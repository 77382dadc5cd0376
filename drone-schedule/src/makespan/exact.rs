#[cfg(test)]
#[path = "../../tests/unit/makespan/exact_test.rs"]
mod exact_test;

use super::{Assignment, Scheduler, assign_lpt, get_longest_first, get_lower_bound, validate_input};
use drone_tours::core::prelude::GenericResult;
use drone_tours::core::utils::Timer;

/// Default absolute gap in seconds between found makespan and its lower bound.
pub const DEFAULT_ABSOLUTE_GAP: f64 = 1000.;
/// Default time limit in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 600.;

const TIME_CHECK_PERIOD: usize = 1024;

/// Finds minimal makespan using depth first branch and bound search seeded by LPT solution.
///
/// The search stops when the best known makespan is within `absolute_gap` seconds of the lower
/// bound or when `time_limit` is reached. In the latter case the best known assignment is returned.
#[derive(Clone, Debug)]
pub struct ExactScheduler {
    /// Accepted absolute difference between makespan and the optimum, in seconds.
    pub absolute_gap: f64,
    /// Time limit in seconds.
    pub time_limit: Option<f64>,
}

impl Default for ExactScheduler {
    fn default() -> Self {
        Self { absolute_gap: DEFAULT_ABSOLUTE_GAP, time_limit: Some(DEFAULT_TIME_LIMIT) }
    }
}

impl ExactScheduler {
    /// Creates a new instance of `ExactScheduler`.
    pub fn new(absolute_gap: f64, time_limit: Option<f64>) -> Self {
        Self { absolute_gap: absolute_gap.max(0.), time_limit }
    }
}

impl Scheduler for ExactScheduler {
    fn assign(&self, number_of_drones: usize, durations: &[f64]) -> GenericResult<Assignment> {
        validate_input(number_of_drones, durations)?;

        let incumbent = assign_lpt(number_of_drones, durations);
        let lower_bound = get_lower_bound(number_of_drones, durations);
        let upper_bound = Assignment::from_drones(number_of_drones, incumbent.as_slice(), durations).makespan();

        if upper_bound - lower_bound <= self.absolute_gap {
            return Ok(Assignment::from_drones(number_of_drones, incumbent.as_slice(), durations));
        }

        let order = get_longest_first(durations);
        let mut search = BranchAndBound {
            durations: order.iter().map(|&job| durations[job]).collect(),
            loads: vec![0.; number_of_drones],
            current: vec![0; durations.len()],
            best: None,
            best_makespan: upper_bound,
            lower_bound,
            absolute_gap: self.absolute_gap,
            time_limit: self.time_limit,
            timer: Timer::start(),
            nodes: 0,
        };

        search.run(0, 0.);

        let drones = match search.best {
            Some(best) => order.iter().zip(best).fold(vec![0; durations.len()], |mut drones, (&job, drone)| {
                drones[job] = drone;
                drones
            }),
            None => incumbent,
        };

        Ok(Assignment::from_drones(number_of_drones, drones.as_slice(), durations))
    }
}

/// Search state: jobs are visited in decreasing duration order.
struct BranchAndBound {
    durations: Vec<f64>,
    loads: Vec<f64>,
    current: Vec<usize>,
    best: Option<Vec<usize>>,
    best_makespan: f64,
    lower_bound: f64,
    absolute_gap: f64,
    time_limit: Option<f64>,
    timer: Timer,
    nodes: usize,
}

impl BranchAndBound {
    /// Returns true when search should be stopped.
    fn run(&mut self, depth: usize, partial_makespan: f64) -> bool {
        if depth == self.durations.len() {
            if partial_makespan < self.best_makespan {
                self.best_makespan = partial_makespan;
                self.best = Some(self.current.clone());
            }

            return self.best_makespan - self.lower_bound <= self.absolute_gap;
        }

        self.nodes += 1;
        if self.nodes % TIME_CHECK_PERIOD == 0 && self.is_time_over() {
            return true;
        }

        let duration = self.durations[depth];

        for drone in 0..self.loads.len() {
            let load = self.loads[drone];

            // drones with the same load are interchangeable
            if self.loads[..drone].contains(&load) {
                continue;
            }

            let makespan = partial_makespan.max(load + duration);
            if makespan + self.absolute_gap >= self.best_makespan {
                continue;
            }

            self.loads[drone] += duration;
            self.current[depth] = drone;

            let should_stop = self.run(depth + 1, makespan);

            self.loads[drone] = load;

            if should_stop {
                return true;
            }
        }

        false
    }

    fn is_time_over(&self) -> bool {
        self.time_limit.is_some_and(|limit| self.timer.elapsed_secs_as_float() > limit)
    }
}
