use super::*;
use crate::helpers::*;
use crate::makespan::LptScheduler;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn brute_force_makespan(number_of_drones: usize, durations: &[f64]) -> f64 {
    let total = number_of_drones.pow(durations.len() as u32);

    (0..total)
        .map(|mut code| {
            let mut loads = vec![0.; number_of_drones];
            durations.iter().for_each(|duration| {
                loads[code % number_of_drones] += duration;
                code /= number_of_drones;
            });
            loads.into_iter().fold(0., f64::max)
        })
        .fold(f64::MAX, f64::min)
}

parameterized_test! {can_find_optimal_makespan, (number_of_drones, durations, lpt_makespan, expected), {
    let lpt = LptScheduler.assign(number_of_drones, durations.as_slice()).expect("cannot assign");
    let exact = ExactScheduler::new(0., None).assign(number_of_drones, durations.as_slice()).expect("cannot assign");

    assert_eq!(lpt.makespan(), lpt_makespan);
    assert_eq!(exact.makespan(), expected);
    assert_valid_assignment(&exact, number_of_drones, durations.as_slice());
}}

can_find_optimal_makespan! {
    case01_three_twos: (2, vec![3., 3., 2., 2., 2.], 7., 6.),
    case02_five_jobs: (2, vec![8., 7., 6., 5., 4.], 17., 15.),
    case03_lpt_optimal: (3, vec![5., 5., 5.], 5., 5.),
}

#[test]
fn can_accept_lpt_solution_within_gap() {
    let durations = [3., 3., 2., 2., 2.];

    let assignment = ExactScheduler::new(1., None).assign(2, &durations).expect("cannot assign");

    assert_eq!(assignment.makespan(), 7.);
}

#[test]
fn can_match_brute_force_on_random_instances() {
    let mut rng = SmallRng::seed_from_u64(42);

    (0..20).for_each(|_| {
        let number_of_drones = rng.gen_range(2..4);
        let durations = (0..8).map(|_| rng.gen_range(1..100) as f64 * 60.).collect::<Vec<_>>();

        let assignment =
            ExactScheduler::new(0., None).assign(number_of_drones, durations.as_slice()).expect("cannot assign");

        assert_valid_assignment(&assignment, number_of_drones, durations.as_slice());
        assert_eq!(assignment.makespan(), brute_force_makespan(number_of_drones, durations.as_slice()));
    });
}

#[test]
fn can_return_best_known_when_time_is_over() {
    let mut rng = SmallRng::seed_from_u64(7);
    let durations = (0..40).map(|_| rng.gen_range(1000..5000) as f64).collect::<Vec<_>>();

    let lpt = LptScheduler.assign(6, durations.as_slice()).expect("cannot assign");
    let exact = ExactScheduler::new(0., Some(0.)).assign(6, durations.as_slice()).expect("cannot assign");

    assert_valid_assignment(&exact, 6, durations.as_slice());
    assert!(exact.makespan() <= lpt.makespan());
}

#[test]
fn can_use_default_gap_and_time_limit() {
    let scheduler = ExactScheduler::default();

    assert_eq!(scheduler.absolute_gap, 1000.);
    assert_eq!(scheduler.time_limit, Some(600.));
}

#[test]
fn can_reject_zero_drones() {
    assert!(ExactScheduler::default().assign(0, &[1.]).is_err());
}
