//! A library part of drone planner command line interface: configuration and solver environment.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod config;
pub mod interruption;

use crate::interruption::create_interruption_quota;
use drone_tours::core::prelude::{Environment, InfoLogger};
use std::sync::Arc;

/// Creates a logger which prints messages to stdout or ignores them.
pub fn create_logger(is_enabled: bool) -> InfoLogger {
    if is_enabled { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) }
}

/// Creates solver environment which can be interrupted by Ctrl-C. Time quota starts counting on
/// creation, so a new environment is needed for every solver run.
pub fn create_environment(is_logging_enabled: bool, max_time: Option<usize>) -> Arc<Environment> {
    Arc::new(Environment {
        logger: create_logger(is_logging_enabled),
        quota: Some(create_interruption_quota(max_time)),
        ..Environment::default()
    })
}
