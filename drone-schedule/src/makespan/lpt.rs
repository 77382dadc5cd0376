#[cfg(test)]
#[path = "../../tests/unit/makespan/lpt_test.rs"]
mod lpt_test;

use super::{Assignment, Scheduler, validate_input};
use drone_tours::core::prelude::GenericResult;

/// Longest processing time first: tours sorted by decreasing duration are given one by one to
/// the least loaded drone. Makespan is within `4/3 - 1/(3m)` of the optimum.
#[derive(Clone, Debug, Default)]
pub struct LptScheduler;

impl Scheduler for LptScheduler {
    fn assign(&self, number_of_drones: usize, durations: &[f64]) -> GenericResult<Assignment> {
        validate_input(number_of_drones, durations)?;

        Ok(Assignment::from_drones(number_of_drones, assign_lpt(number_of_drones, durations).as_slice(), durations))
    }
}

/// Returns drone index for each tour.
pub(crate) fn assign_lpt(number_of_drones: usize, durations: &[f64]) -> Vec<usize> {
    let mut loads = vec![0_f64; number_of_drones];
    let mut drones = vec![0; durations.len()];

    get_longest_first(durations).into_iter().for_each(|job| {
        let drone = loads
            .iter()
            .enumerate()
            .min_by(|(a_idx, a), (b_idx, b)| a.total_cmp(b).then(a_idx.cmp(b_idx)))
            .map_or(0, |(idx, _)| idx);

        loads[drone] += durations[job];
        drones[job] = drone;
    });

    drones
}

/// Returns tour indices sorted by decreasing duration, ties are resolved by index.
pub(crate) fn get_longest_first(durations: &[f64]) -> Vec<usize> {
    let mut order = (0..durations.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| durations[b].total_cmp(&durations[a]).then(a.cmp(&b)));

    order
}
