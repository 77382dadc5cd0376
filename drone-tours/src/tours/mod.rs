//! Contains tours report: a solution of routing problem expressed in terms of grid points.

#[cfg(test)]
#[path = "../../tests/unit/tours/report_test.rs"]
mod report_test;

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;

use crate::distances::DistanceMatrix;
use crate::grid::{DemandPoint, PopulationGrid};
use crate::routing::{DEPOT_LOCATION, FleetParams, TerminationParams, create_problem, solve_tours};
use crate::splitting::split_dense_points;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vrp_core::prelude::{Environment, GenericResult, Solution};

/// A visited point of the tour.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TourStop {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
    /// Demand served at the stop.
    pub population: i32,
    /// Cumulative load delivered so far, including this stop.
    pub load: i32,
}

/// A single drone tour which starts at the depot.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TourRoute {
    /// Tour stops: the first one is the depot, the return to the depot is not listed.
    pub stops: Vec<TourStop>,
    /// Tour distance in metres including the return to the depot.
    pub distance: f64,
    /// Total load of the tour.
    pub load: i32,
    /// Amount of listed stops.
    pub number_of_stops: usize,
}

impl TourRoute {
    /// Creates a tour from visited points, accumulating their load.
    pub fn new<'a>(points: impl Iterator<Item = &'a DemandPoint>, distance: f64) -> Self {
        let stops = points
            .scan(0, |load, point| {
                *load += point.population;
                Some(TourStop { lon: point.lon, lat: point.lat, population: point.population, load: *load })
            })
            .collect::<Vec<_>>();

        let load = stops.last().map_or(0, |stop| stop.load);
        let number_of_stops = stops.len();

        Self { stops, distance, load, number_of_stops }
    }
}

/// Keeps all tours built for given drone capacity.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ToursReport {
    /// Drone capacity.
    pub capacity: i32,
    /// Maximum demand of a single point used to split dense points.
    pub max_point_demand: i32,
    /// Non-empty tours.
    pub routes: Vec<TourRoute>,
    /// Indices of split points which are not served by any tour.
    #[serde(default)]
    pub unassigned: Vec<usize>,
    /// Sum of tour loads.
    pub total_load: i64,
    /// Sum of tour distances.
    pub total_distance: f64,
    /// Amount of tours, each tour requires one drone departure.
    pub number_of_drones_used: usize,
    /// Sum of tour stops.
    pub total_number_of_stops: usize,
}

impl ToursReport {
    /// Creates a report from tours, computing totals. Tours without load are ignored.
    pub fn new(capacity: i32, max_point_demand: i32, routes: Vec<TourRoute>, unassigned: Vec<usize>) -> Self {
        let routes = routes.into_iter().filter(|route| route.load > 0).collect::<Vec<_>>();

        Self {
            capacity,
            max_point_demand,
            total_load: routes.iter().map(|route| route.load as i64).sum(),
            total_distance: routes.iter().map(|route| route.distance).sum(),
            number_of_drones_used: routes.len(),
            total_number_of_stops: routes.iter().map(|route| route.number_of_stops).sum(),
            routes,
            unassigned,
        }
    }
}

/// Creates tours report from `vrp-core` solution. Locations of the solution are point indices.
pub fn create_tours_report(
    points: &[DemandPoint],
    matrix: &DistanceMatrix,
    solution: &Solution,
    fleet: &FleetParams,
) -> GenericResult<ToursReport> {
    let paths = solution.get_locations().map(Iterator::collect::<Vec<_>>).collect::<Vec<_>>();

    create_tours_report_from_paths(points, matrix, paths.as_slice(), fleet)
}

/// Creates tours report from paths. Each path is a sequence of point indices which starts at
/// the depot and optionally returns to it.
pub fn create_tours_report_from_paths(
    points: &[DemandPoint],
    matrix: &DistanceMatrix,
    paths: &[Vec<usize>],
    fleet: &FleetParams,
) -> GenericResult<ToursReport> {
    if let Some(idx) = paths.iter().flatten().find(|&&idx| idx >= points.len() || idx >= matrix.size()) {
        return Err(format!("path refers to unknown point: {idx}").into());
    }

    let routes = paths
        .iter()
        .map(|path| {
            let stops = match path.split_last() {
                Some((&last, stops)) if last == DEPOT_LOCATION && !stops.is_empty() => stops,
                _ => path.as_slice(),
            };

            TourRoute::new(stops.iter().map(|&idx| &points[idx]), matrix.path_distance(path))
        })
        .collect();

    let visited = paths.iter().flatten().copied().collect::<FxHashSet<_>>();
    let unassigned = (0..points.len()).filter(|idx| *idx != DEPOT_LOCATION && !visited.contains(idx)).collect();

    Ok(ToursReport::new(fleet.capacity, fleet.max_point_demand, routes, unassigned))
}

/// Builds tours which serve population of the grid using a fleet of drones. The matrix keeps
/// distances between grid points.
pub fn plan_tours(
    grid: &PopulationGrid,
    matrix: &DistanceMatrix,
    fleet: &FleetParams,
    termination: &TerminationParams,
    environment: Arc<Environment>,
) -> GenericResult<ToursReport> {
    fleet.validate()?;

    if grid.points.len() != matrix.size() {
        return Err(format!("matrix size {} does not match {} grid points", matrix.size(), grid.points.len()).into());
    }

    let split = split_dense_points(grid, fleet.max_point_demand)?;
    let matrix = matrix.expand(split.origins.as_slice());

    (environment.logger)(
        format!(
            "{} grid points are split into {} points, max point demand: {}",
            grid.points.len(),
            split.points.len(),
            fleet.max_point_demand
        )
        .as_str(),
    );

    if split.points.len() <= 1 {
        return create_tours_report_from_paths(split.points.as_slice(), &matrix, &[], fleet);
    }

    let problem = Arc::new(create_problem(split.points.as_slice(), &matrix, fleet)?);
    let solution = solve_tours(problem, environment.clone(), termination)?;
    let report = create_tours_report(split.points.as_slice(), &matrix, &solution, fleet)?;

    if !report.unassigned.is_empty() {
        (environment.logger)(
            format!("WARN: {} of {} points are left unassigned", report.unassigned.len(), split.points.len() - 1)
                .as_str(),
        );
    }

    Ok(report)
}
