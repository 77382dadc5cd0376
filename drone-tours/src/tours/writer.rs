#[cfg(test)]
#[path = "../../tests/unit/tours/writer_test.rs"]
mod writer_test;

use super::{TourRoute, ToursReport};
use serde::Serialize;
use std::collections::HashMap;
use std::io::{BufWriter, Write};
use vrp_core::prelude::GenericResult;

/// Writes tours report as pretty printed json.
pub fn write_tours_report<W: Write>(writer: BufWriter<W>, report: &ToursReport) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot write tours report: '{err}'").into())
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: (f64, f64) },
    LineString { coordinates: Vec<(f64, f64)> },
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
struct Feature {
    properties: HashMap<String, String>,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
struct FeatureCollection {
    features: Vec<Feature>,
}

const COLORS: &[&str] = &[
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c", "#008080", "#9a6324",
];

/// Writes tours as geojson: a line string per tour which is closed at the depot and a depot point.
pub fn write_tours_geojson<W: Write>(writer: BufWriter<W>, report: &ToursReport) -> GenericResult<()> {
    let depot = report.routes.first().and_then(|route| route.stops.first()).map(|stop| Feature {
        properties: slice_to_map(&[("name", "depot"), ("marker-symbol", "warehouse"), ("marker-size", "large")]),
        geometry: Geometry::Point { coordinates: (stop.lon, stop.lat) },
    });

    let tours = report.routes.iter().enumerate().map(|(idx, route)| create_tour_feature(idx, route));

    let collection = FeatureCollection { features: depot.into_iter().chain(tours).collect() };

    serde_json::to_writer_pretty(writer, &collection).map_err(|err| format!("cannot write tours geojson: '{err}'").into())
}

fn create_tour_feature(idx: usize, route: &TourRoute) -> Feature {
    let coordinates =
        route.stops.iter().chain(route.stops.first()).map(|stop| (stop.lon, stop.lat)).collect::<Vec<_>>();

    Feature {
        properties: slice_to_map(&[
            ("tour_idx", idx.to_string().as_str()),
            ("load", route.load.to_string().as_str()),
            ("distance", format!("{:.0}", route.distance).as_str()),
            ("number_of_stops", route.number_of_stops.to_string().as_str()),
            ("stroke", COLORS[idx % COLORS.len()]),
            ("stroke-width", "2"),
        ]),
        geometry: Geometry::LineString { coordinates },
    }
}

fn slice_to_map(vec: &[(&str, &str)]) -> HashMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}
