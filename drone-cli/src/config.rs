//! Contains configuration of a planning run which is read from json file.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use drone_schedule::durations::DurationParams;
use drone_schedule::makespan::{DEFAULT_ABSOLUTE_GAP, DEFAULT_TIME_LIMIT, ExactScheduler, LptScheduler, Scheduler};
use drone_schedule::sweep::{DEFAULT_MAX_DRONES, DEFAULT_MIN_DRONES};
use drone_tours::core::prelude::GenericResult;
use drone_tours::grid::{DEFAULT_POPULATION_PROPERTY, GeoPoint};
use drone_tours::routing::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// A planning configuration. Every section is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Grid input settings.
    pub grid: GridConfig,
    /// Drone fleet settings.
    pub fleet: FleetConfig,
    /// Routing solver termination settings.
    pub termination: TerminationConfig,
    /// Tour assignment settings.
    pub schedule: ScheduleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Specifies how the population grid is read.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Name of the feature property with population.
    pub population_property: String,
    /// Location of distribution center.
    pub depot: GeoPoint,
    /// Path to the distance matrix cache.
    pub distance_cache: Option<PathBuf>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            population_property: DEFAULT_POPULATION_PROPERTY.to_string(),
            depot: GeoPoint::default(),
            distance_cache: None,
        }
    }
}

/// Drone capacity and maximum point demand to build tours for.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// Drone capacity.
    pub capacity: i32,
    /// Maximum demand of a single point.
    pub max_point_demand: i32,
}

/// Specifies drone fleet.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetConfig {
    /// Scenarios to plan.
    pub scenarios: Vec<ScenarioConfig>,
    /// Time spent at a stop in minutes.
    pub stop_time_minutes: f64,
    /// Length of operational day in hours.
    pub operating_day_hours: f64,
    /// Extra vehicles added to the estimated fleet.
    pub reserve_vehicles: usize,
    /// Explicit fleet size.
    pub vehicles: Option<usize>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            scenarios: vec![ScenarioConfig { capacity: 100, max_point_demand: 20 }],
            stop_time_minutes: DEFAULT_STOP_TIME_MINUTES,
            operating_day_hours: DEFAULT_OPERATING_DAY_HOURS,
            reserve_vehicles: DEFAULT_RESERVE_VEHICLES,
            vehicles: None,
        }
    }
}

/// Routing solver termination criteria.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminationConfig {
    /// Max time in seconds.
    pub max_time: Option<usize>,
    /// Max amount of generations.
    pub max_generations: Option<usize>,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self { max_time: Some(DEFAULT_MAX_TIME), max_generations: None }
    }
}

/// Tour assignment settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    /// Drone speed in km/h.
    pub speed_km_h: f64,
    /// Time spent at a stop in minutes.
    pub stop_time_minutes: f64,
    /// Minimum fleet size.
    pub min_drones: usize,
    /// Maximum fleet size.
    pub max_drones: usize,
    /// Assignment algorithm.
    pub strategy: StrategyConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let params = DurationParams::default();

        Self {
            speed_km_h: params.speed_km_h,
            stop_time_minutes: params.stop_time_minutes,
            min_drones: DEFAULT_MIN_DRONES,
            max_drones: DEFAULT_MAX_DRONES,
            strategy: StrategyConfig::default(),
        }
    }
}

/// Tour assignment algorithm.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StrategyConfig {
    /// Exact search with absolute gap and time limit in seconds.
    Exact {
        /// Accepted absolute difference to the optimum.
        #[serde(default = "default_absolute_gap")]
        absolute_gap: f64,
        /// Time limit.
        #[serde(default = "default_time_limit")]
        time_limit: Option<f64>,
    },
    /// Longest processing time first heuristic.
    Lpt,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::Exact { absolute_gap: DEFAULT_ABSOLUTE_GAP, time_limit: Some(DEFAULT_TIME_LIMIT) }
    }
}

impl StrategyConfig {
    /// Returns strategy name used in file names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact { .. } => "exact",
            Self::Lpt => "lpt",
        }
    }
}

fn default_absolute_gap() -> f64 {
    DEFAULT_ABSOLUTE_GAP
}

fn default_time_limit() -> Option<f64> {
    Some(DEFAULT_TIME_LIMIT)
}

/// Logging settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// Whether progress is printed to stdout.
    pub enabled: bool,
}

impl Config {
    /// Returns fleet parameters for the scenario.
    pub fn fleet_params(&self, scenario: &ScenarioConfig) -> FleetParams {
        FleetParams {
            capacity: scenario.capacity,
            max_point_demand: scenario.max_point_demand,
            stop_time_minutes: self.fleet.stop_time_minutes,
            operating_day_hours: self.fleet.operating_day_hours,
            reserve_vehicles: self.fleet.reserve_vehicles,
            vehicles: self.fleet.vehicles,
        }
    }

    /// Returns routing termination parameters.
    pub fn termination_params(&self) -> TerminationParams {
        TerminationParams { max_time: self.termination.max_time, max_generations: self.termination.max_generations }
    }

    /// Returns tour duration parameters.
    pub fn duration_params(&self) -> DurationParams {
        DurationParams { speed_km_h: self.schedule.speed_km_h, stop_time_minutes: self.schedule.stop_time_minutes }
    }

    /// Creates tour assignment algorithm.
    pub fn create_scheduler(&self) -> Box<dyn Scheduler> {
        match &self.schedule.strategy {
            StrategyConfig::Exact { absolute_gap, time_limit } => Box::new(ExactScheduler::new(*absolute_gap, *time_limit)),
            StrategyConfig::Lpt => Box::new(LptScheduler),
        }
    }

    /// Returns range of fleet sizes to schedule tours for.
    pub fn fleet_sizes(&self) -> RangeInclusive<usize> {
        self.schedule.min_drones..=self.schedule.max_drones
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
