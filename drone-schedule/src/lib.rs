//! Schedule crate assigns drone tours to a fleet of drones so that the time when the last drone
//! finishes its work (makespan) is minimal.
//!
//! Tours are produced by `drone-tours` crate and treated as independent jobs: each tour has a
//! duration which consists of flight time and time spent at stops.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod durations;
pub mod makespan;
pub mod sweep;
