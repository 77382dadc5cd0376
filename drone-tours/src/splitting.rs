//! Splits dense grid cells into several demand points.
//!
//! A routing vehicle cannot visit the same location twice, so a cell which demand exceeds vehicle
//! capacity would make the problem infeasible. Such cells are replaced by a few points at the same
//! coordinate which share the original demand.

#[cfg(test)]
#[path = "../tests/unit/splitting_test.rs"]
mod splitting_test;

use crate::grid::{DemandPoint, PopulationGrid};
use vrp_core::prelude::GenericResult;

/// Keeps split demand points together with the index of their origin in the grid.
#[derive(Clone, Debug)]
pub struct SplitPoints {
    /// Demand points, the depot is kept at index zero.
    pub points: Vec<DemandPoint>,
    /// Index of the original grid point for each split point.
    pub origins: Vec<usize>,
}

/// Splits integer value into `bins` parts keeping the difference between them as small as possible.
/// Larger parts go first, e.g. 50 into 3 bins gives `[17, 17, 16]`.
pub fn near_split(value: i32, bins: usize) -> Vec<i32> {
    if bins == 0 {
        return vec![];
    }

    let bins_value = bins as i32;
    let (quotient, remainder) = (value / bins_value, (value % bins_value) as usize);

    (0..bins).map(|idx| if idx < remainder { quotient + 1 } else { quotient }).collect()
}

/// Splits points which population exceeds `max_point_demand` into several points with the same
/// coordinates and smaller demand.
pub fn split_dense_points(grid: &PopulationGrid, max_point_demand: i32) -> GenericResult<SplitPoints> {
    if max_point_demand <= 0 {
        return Err(format!("max point demand must be positive, got: {max_point_demand}").into());
    }

    let (points, origins): (Vec<_>, Vec<_>) = grid
        .points
        .iter()
        .enumerate()
        .flat_map(|(origin, point)| {
            let populations = if point.population > 0 {
                let bins = (point.population as usize).div_ceil(max_point_demand as usize);
                near_split(point.population, bins)
            } else {
                vec![point.population]
            };

            populations.into_iter().map(move |population| (DemandPoint { population, ..*point }, origin))
        })
        .unzip();

    Ok(SplitPoints { points, origins })
}
