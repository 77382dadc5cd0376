//! Estimates how long it takes to fly a tour.

#[cfg(test)]
#[path = "../tests/unit/durations_test.rs"]
mod durations_test;

use drone_tours::core::prelude::GenericResult;
use drone_tours::tours::{TourRoute, ToursReport};

/// Specifies drone movement parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationParams {
    /// Drone speed in km/h.
    pub speed_km_h: f64,
    /// Time spent at a single stop in minutes.
    pub stop_time_minutes: f64,
}

impl Default for DurationParams {
    fn default() -> Self {
        Self { speed_km_h: 60., stop_time_minutes: 15. }
    }
}

impl DurationParams {
    /// Checks that speed is positive and stop time is not negative.
    pub fn validate(&self) -> GenericResult<()> {
        if !(self.speed_km_h > 0.) || !(self.stop_time_minutes >= 0.) {
            return Err(format!(
                "invalid duration params: speed {}km/h, stop time {}min",
                self.speed_km_h, self.stop_time_minutes
            )
            .into());
        }

        Ok(())
    }

    fn speed_m_s(&self) -> f64 {
        self.speed_km_h * 1000. / 3600.
    }

    fn stop_time_sec(&self) -> f64 {
        self.stop_time_minutes * 60.
    }
}

/// Returns tour duration in seconds. Consecutive stops at the same coordinate are served at once.
pub fn tour_duration(route: &TourRoute, params: &DurationParams) -> f64 {
    let distinct_stops = route
        .stops
        .windows(2)
        .filter(|pair| pair[0].lat != pair[1].lat || pair[0].lon != pair[1].lon)
        .count();

    route.distance / params.speed_m_s() + distinct_stops as f64 * params.stop_time_sec()
}

/// Returns durations of all tours in the report.
pub fn tour_durations(report: &ToursReport, params: &DurationParams) -> Vec<f64> {
    report.routes.iter().map(|route| tour_duration(route, params)).collect()
}
