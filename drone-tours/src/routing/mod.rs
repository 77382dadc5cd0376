//! Defines capacitated drone routing problem and runs `vrp-core` solver on it.

#[cfg(test)]
#[path = "../../tests/unit/routing/params_test.rs"]
mod params_test;

mod problem;
pub use self::problem::*;

mod solver;
pub use self::solver::*;

use vrp_core::prelude::GenericResult;

/// Default time in minutes a drone spends serving a single stop.
pub const DEFAULT_STOP_TIME_MINUTES: f64 = 15.;
/// Default length of one operational day in hours.
pub const DEFAULT_OPERATING_DAY_HOURS: f64 = 12.;
/// Default amount of extra vehicles added to the estimated fleet size.
pub const DEFAULT_RESERVE_VEHICLES: usize = 20;
/// Default max solver running time in seconds.
pub const DEFAULT_MAX_TIME: usize = 4800;

/// Specifies drone fleet used to build tours.
#[derive(Clone, Debug, PartialEq)]
pub struct FleetParams {
    /// Capacity of a single drone.
    pub capacity: i32,
    /// Maximum demand which a point can have. Denser points are split.
    pub max_point_demand: i32,
    /// Time in minutes spent at a single stop.
    pub stop_time_minutes: f64,
    /// Length of one operational day in hours.
    pub operating_day_hours: f64,
    /// Amount of extra vehicles added to the estimated fleet size.
    pub reserve_vehicles: usize,
    /// Explicit fleet size which overrides the estimation.
    pub vehicles: Option<usize>,
}

impl FleetParams {
    /// Creates fleet parameters with default timing.
    pub fn new(capacity: i32, max_point_demand: i32) -> Self {
        Self {
            capacity,
            max_point_demand,
            stop_time_minutes: DEFAULT_STOP_TIME_MINUTES,
            operating_day_hours: DEFAULT_OPERATING_DAY_HOURS,
            reserve_vehicles: DEFAULT_RESERVE_VEHICLES,
            vehicles: None,
        }
    }

    /// Checks that parameters describe a feasible fleet.
    pub fn validate(&self) -> GenericResult<()> {
        if self.capacity <= 0 {
            return Err(format!("drone capacity must be positive, got: {}", self.capacity).into());
        }

        if self.max_point_demand <= 0 || self.max_point_demand > self.capacity {
            return Err(format!(
                "max point demand must be in range [1, {}], got: {}",
                self.capacity, self.max_point_demand
            )
            .into());
        }

        if self.stop_time_minutes <= 0. || self.operating_day_hours <= 0. {
            return Err("stop time and operating day length must be positive".into());
        }

        if self.vehicles == Some(0) {
            return Err("explicit fleet size must be positive".into());
        }

        Ok(())
    }

    /// Returns the maximum amount of stops a drone can make during a day.
    pub fn max_stops(&self) -> usize {
        ((60. / self.stop_time_minutes) * self.operating_day_hours).ceil() as usize
    }

    /// Returns amount of vehicles to use in the routing problem.
    pub fn fleet_size(&self, jobs: usize, total_demand: i64) -> usize {
        self.vehicles.unwrap_or_else(|| {
            let by_stops = jobs.div_ceil(self.max_stops().max(1));
            let by_demand = (total_demand.max(0) as usize).div_ceil(self.capacity as usize);

            by_stops.max(by_demand) + self.reserve_vehicles
        })
    }
}

/// Specifies routing solver termination criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminationParams {
    /// Max running time in seconds.
    pub max_time: Option<usize>,
    /// Max amount of generations.
    pub max_generations: Option<usize>,
}

impl Default for TerminationParams {
    fn default() -> Self {
        Self { max_time: Some(DEFAULT_MAX_TIME), max_generations: None }
    }
}
