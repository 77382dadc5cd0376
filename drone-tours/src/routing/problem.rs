#[cfg(test)]
#[path = "../../tests/unit/routing/problem_test.rs"]
mod problem_test;

use super::FleetParams;
use crate::distances::DistanceMatrix;
use crate::grid::DemandPoint;
use std::sync::Arc;
use vrp_core::prelude::*;

/// Location index of the depot in the routing matrix.
pub const DEPOT_LOCATION: usize = 0;

/// Limits the amount of stops in a single tour.
struct StopLimitConstraint {
    code: ViolationCode,
    max_stops: usize,
}

impl FeatureConstraint for StopLimitConstraint {
    fn evaluate(&self, move_ctx: &MoveContext<'_>) -> Option<ConstraintViolation> {
        match move_ctx {
            MoveContext::Route { route_ctx, .. } => {
                if route_ctx.route().tour.job_count() >= self.max_stops {
                    ConstraintViolation::fail(self.code)
                } else {
                    None
                }
            }
            MoveContext::Activity { .. } => None,
        }
    }
}

/// Creates CVRP variant: every non-depot point becomes a delivery job with population as demand,
/// the fleet consists of identical drones which start and end their tours at the depot.
pub fn create_problem(points: &[DemandPoint], matrix: &DistanceMatrix, fleet: &FleetParams) -> GenericResult<Problem> {
    fleet.validate()?;

    if points.len() != matrix.size() {
        return Err(format!("matrix size {} does not match {} points", matrix.size(), points.len()).into());
    }

    if let Some((idx, point)) = points.iter().enumerate().skip(1).find(|(_, point)| point.population > fleet.capacity) {
        return Err(format!("point {idx} has demand {} exceeding drone capacity", point.population).into());
    }

    // NOTE the same data is used for durations as the problem is not time constrained
    let values = matrix.values().to_vec();
    let transport = Arc::new(SimpleTransportCost::new(values.clone(), values)?);

    let goal = define_goal(transport.clone(), fleet.max_stops())?;

    let jobs = points
        .iter()
        .enumerate()
        .skip(DEPOT_LOCATION + 1)
        .map(|(idx, point)| {
            SingleBuilder::default()
                .id(idx.to_string().as_str())
                .demand(Demand::delivery(point.population))
                .location(idx)?
                .build_as_job()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_demand = points.iter().map(|point| point.population as i64).sum();
    let vehicles = (0..fleet.fleet_size(jobs.len(), total_demand))
        .map(|idx| {
            VehicleBuilder::default()
                .id(format!("drone{idx}").as_str())
                .add_detail(
                    VehicleDetailBuilder::default()
                        .set_start_location(DEPOT_LOCATION)
                        .set_end_location(DEPOT_LOCATION)
                        .build()?,
                )
                .capacity(SingleDimLoad::new(fleet.capacity))
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;

    ProblemBuilder::default()
        .add_jobs(jobs.into_iter())
        .add_vehicles(vehicles.into_iter())
        .with_goal(goal)
        .with_transport_cost(transport)
        .build()
}

/// Defines goal of optimization: serve all points, then minimize total distance.
fn define_goal(transport: Arc<SimpleTransportCost>, max_stops: usize) -> GenericResult<GoalContext> {
    let minimize_unassigned = MinimizeUnassignedBuilder::new("min-unassigned").build()?;
    let transport_feature = TransportFeatureBuilder::new("min-distance")
        .set_transport_cost(transport)
        .set_time_constrained(false)
        .build_minimize_distance()?;
    let capacity_feature = CapacityFeatureBuilder::<SingleDimLoad>::new("capacity").build()?;
    let stop_limit_feature = FeatureBuilder::default()
        .with_name("stop-limit")
        .with_constraint(StopLimitConstraint { code: ViolationCode::default(), max_stops })
        .build()?;

    GoalContextBuilder::with_features(&[minimize_unassigned, transport_feature, capacity_feature, stop_limit_feature])?
        .build()
}
