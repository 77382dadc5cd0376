#[cfg(test)]
#[path = "../../tests/unit/grid/reader_test.rs"]
mod reader_test;

use super::*;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::{BufReader, Read};
use vrp_core::prelude::{GenericError, GenericResult};

/// A trait to read population grid from GeoJSON feature collection.
pub trait PopulationGridReader {
    /// Reads population grid using given depot location and the name of population property.
    fn read_population_grid(self, depot: GeoPoint, population_property: &str) -> GenericResult<PopulationGrid>;
}

impl<R: Read> PopulationGridReader for BufReader<R> {
    fn read_population_grid(self, depot: GeoPoint, population_property: &str) -> GenericResult<PopulationGrid> {
        let collection: FeatureCollection =
            serde_json::from_reader(self).map_err(|err| format!("cannot deserialize grid: '{err}'"))?;

        read_grid(collection, depot, population_property)
    }
}

impl PopulationGridReader for String {
    fn read_population_grid(self, depot: GeoPoint, population_property: &str) -> GenericResult<PopulationGrid> {
        BufReader::new(self.as_bytes()).read_population_grid(depot, population_property)
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum FeatureCollection {
    FeatureCollection { features: Vec<Feature> },
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point {
        coordinates: Vec<f64>,
    },
    #[serde(other)]
    Unsupported,
}

fn read_grid(collection: FeatureCollection, depot: GeoPoint, population_property: &str) -> GenericResult<PopulationGrid> {
    let FeatureCollection::FeatureCollection { features } = collection;

    let cells = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| read_cell(idx, feature, population_property))
        .collect::<GenericResult<Vec<_>>>()?;

    Ok(PopulationGrid::new(depot, cells.into_iter()))
}

fn read_cell(idx: usize, feature: &Feature, population_property: &str) -> GenericResult<DemandPoint> {
    let (lon, lat) = match &feature.geometry {
        Some(Geometry::Point { coordinates }) if coordinates.len() >= 2 => (coordinates[0], coordinates[1]),
        Some(Geometry::Point { .. }) => return Err(format!("feature {idx} has point without coordinates").into()),
        Some(Geometry::Unsupported) => return Err(format!("feature {idx} has non-point geometry").into()),
        None => return Err(format!("feature {idx} has no geometry").into()),
    };

    let population = feature
        .properties
        .as_ref()
        .and_then(|properties| properties.get(population_property))
        .ok_or_else(|| GenericError::from(format!("feature {idx} has no '{population_property}' property")))?;

    let population = match population {
        // NOTE empty cells are exported with null values
        Value::Null => 0,
        Value::Number(number) => number
            .as_f64()
            .map(|value| value.round() as i32)
            .ok_or_else(|| GenericError::from(format!("feature {idx} has invalid population: '{number}'")))?,
        other => return Err(format!("feature {idx} has non-numeric population: '{other}'").into()),
    };

    Ok(DemandPoint { lon, lat, population })
}
