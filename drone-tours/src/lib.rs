//! Tours crate contains logic to turn a population grid into capacitated drone tours.
//!
//!
//! # Pipeline
//!
//! - **grid**: reads a population weighted centroid grid stored as GeoJSON
//! - **splitting**: splits dense cells into several demand points
//! - **distances**: builds geodesic distance matrix with optional file cache
//! - **routing**: defines CVRP variant and solves it using `vrp-core`
//! - **tours**: converts solution into a tours report and writes it

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use vrp_core as core;

pub mod distances;
pub mod grid;
pub mod routing;
pub mod splitting;
pub mod tours;

pub use self::tours::plan_tours;
