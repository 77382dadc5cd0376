use crate::grid::{DemandPoint, GeoPoint, PopulationGrid};

/// lon, lat, population
pub type Cell = (f64, f64, i32);

pub struct GridBuilder {
    property: String,
    cells: Vec<Cell>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self { property: "TotBef".to_string(), cells: vec![] }
    }
}

impl GridBuilder {
    pub fn set_property(&mut self, property: &str) -> &mut Self {
        self.property = property.to_string();
        self
    }

    pub fn add_cell(&mut self, cell: Cell) -> &mut Self {
        self.cells.push(cell);
        self
    }

    pub fn build(&self) -> String {
        let features = self
            .cells
            .iter()
            .map(|(lon, lat, population)| {
                format!(
                    r#"{{"type":"Feature","properties":{{"{}":{}}},"geometry":{{"type":"Point","coordinates":[{},{}]}}}}"#,
                    self.property, population, lon, lat
                )
            })
            .collect::<Vec<_>>()
            .join(",");

        format!(r#"{{"type":"FeatureCollection","name":"centroids","features":[{features}]}}"#)
    }
}

pub fn test_depot() -> GeoPoint {
    GeoPoint::new(16.1788, 58.5633)
}

pub fn create_test_grid(cells: &[Cell]) -> PopulationGrid {
    PopulationGrid::new(
        test_depot(),
        cells.iter().map(|&(lon, lat, population)| DemandPoint { lon, lat, population }),
    )
}
