//! Contains population grid models and their GeoJSON reader.

mod reader;
pub use self::reader::*;

use serde::{Deserialize, Serialize};

/// Default name of a feature property which keeps population count.
pub const DEFAULT_POPULATION_PROPERTY: &str = "TotBef";

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct GeoPoint {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint`.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl Default for GeoPoint {
    /// Returns the location of the test distribution center used by default.
    fn default() -> Self {
        Self { lon: 16.1788, lat: 58.5633 }
    }
}

/// A delivery location with its demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandPoint {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
    /// Population count which is served as demand.
    pub population: i32,
}

impl DemandPoint {
    /// Creates a point without demand, e.g. the depot.
    pub fn depot(location: GeoPoint) -> Self {
        Self { lon: location.lon, lat: location.lat, population: 0 }
    }

    /// Returns point coordinate.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lon, self.lat)
    }

    /// Checks whether both points share the same coordinate.
    pub fn is_same_location(&self, other: &DemandPoint) -> bool {
        self.lon == other.lon && self.lat == other.lat
    }
}

/// A population grid: the depot is always kept at index zero, all other points have positive population.
#[derive(Clone, Debug)]
pub struct PopulationGrid {
    /// Grid points, starting from the depot.
    pub points: Vec<DemandPoint>,
}

impl PopulationGrid {
    /// Creates a grid from the depot and populated cells. Cells without population are ignored.
    pub fn new(depot: GeoPoint, cells: impl Iterator<Item = DemandPoint>) -> Self {
        let points = std::iter::once(DemandPoint::depot(depot)).chain(cells.filter(|cell| cell.population > 0)).collect();

        Self { points }
    }

    /// Returns the depot point.
    pub fn depot(&self) -> &DemandPoint {
        &self.points[0]
    }

    /// Returns total demand of all cells.
    pub fn total_demand(&self) -> i64 {
        self.points.iter().map(|point| point.population as i64).sum()
    }
}
