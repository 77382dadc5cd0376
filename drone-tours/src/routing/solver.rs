use super::TerminationParams;
use std::sync::Arc;
use vrp_core::prelude::*;
use vrp_core::utils::Timer;

/// Runs `vrp-core` solver with default metaheuristic and given termination criteria.
pub fn solve_tours(
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    termination: &TerminationParams,
) -> GenericResult<Solution> {
    let logger = environment.logger.clone();
    let timer = Timer::start();

    (logger)(
        format!(
            "solving problem with {} jobs and {} vehicles, max time: {:?}s, max generations: {:?}",
            problem.jobs.size(),
            problem.fleet.vehicles.len(),
            termination.max_time,
            termination.max_generations
        )
        .as_str(),
    );

    let config = VrpConfigBuilder::new(problem.clone())
        .set_environment(environment)
        .prebuild()?
        .with_max_time(termination.max_time)
        .with_max_generations(termination.max_generations)
        .build()?;

    let solution = Solver::new(problem, config).solve()?;

    (logger)(
        format!(
            "solution with {} tours and {} unassigned jobs found in {}ms",
            solution.routes.len(),
            solution.unassigned.len(),
            timer.elapsed_millis()
        )
        .as_str(),
    );

    Ok(solution)
}
