//! Contains distance matrix functionality.

#[cfg(test)]
#[path = "../../tests/unit/distances/matrix_test.rs"]
mod matrix_test;

mod cache;
pub use self::cache::*;

mod geodesic;
pub use self::geodesic::*;

use crate::grid::GeoPoint;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use vrp_core::prelude::GenericResult;

/// A square, symmetric distance matrix in metres stored in row-major order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a new matrix from flatten values.
    pub fn new(size: usize, values: Vec<f64>) -> GenericResult<Self> {
        if size * size != values.len() {
            return Err(format!("non-square flatten matrix: {} items for size {size}", values.len()).into());
        }

        Ok(Self { size, values })
    }

    /// Computes geodesic distances between all pairs of points.
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let size = points.len();

        // NOTE only upper triangle is computed to keep the matrix strictly symmetric
        let upper = (0..size)
            .into_par_iter()
            .map(|from| ((from + 1)..size).map(|to| geodesic_distance(&points[from], &points[to])).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let mut values = vec![0.; size * size];
        upper.iter().enumerate().for_each(|(from, row)| {
            row.iter().enumerate().for_each(|(offset, &distance)| {
                let to = from + offset + 1;
                values[from * size + to] = distance;
                values[to * size + from] = distance;
            });
        });

        Self { size, values }
    }

    /// Returns amount of rows (columns) in the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two points.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    /// Returns flatten matrix values.
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Builds a matrix for points derived from the matrix points: `origins` keeps an index of
    /// the original point for each derived one.
    pub fn expand(&self, origins: &[usize]) -> Self {
        let size = origins.len();
        let values = origins
            .iter()
            .flat_map(|&from| origins.iter().map(move |&to| self.distance(from, to)))
            .collect::<Vec<_>>();

        Self { size, values }
    }

    /// Returns total distance of the path which visits given points in the order.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|pair| self.distance(pair[0], pair[1])).sum()
    }
}
