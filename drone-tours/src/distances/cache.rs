#[cfg(test)]
#[path = "../../tests/unit/distances/cache_test.rs"]
mod cache_test;

use super::DistanceMatrix;
use crate::grid::GeoPoint;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use vrp_core::prelude::{GenericResult, InfoLogger};
use vrp_core::utils::Timer;

/// Returns distance matrix for given points. When `cache` path is specified, the matrix is read from
/// it if it was computed for the same amount of points, otherwise it is computed and stored there.
pub fn load_or_create_matrix(
    points: &[GeoPoint],
    cache: Option<&Path>,
    logger: &InfoLogger,
) -> GenericResult<DistanceMatrix> {
    if let Some(matrix) = cache.filter(|path| path.exists()).map(read_matrix).transpose()? {
        if matrix.size() == points.len() {
            (logger)(format!("distance matrix of size {} is read from cache", matrix.size()).as_str());
            return Ok(matrix);
        }

        (logger)(
            format!("cached distance matrix has size {}, expected {}: recalculating", matrix.size(), points.len())
                .as_str(),
        );
    }

    let timer = Timer::start();
    let matrix = DistanceMatrix::from_points(points);
    (logger)(format!("distance matrix of size {} created in {}ms", matrix.size(), timer.elapsed_millis()).as_str());

    if let Some(path) = cache {
        write_matrix(path, &matrix)?;
    }

    Ok(matrix)
}

/// Reads distance matrix from a JSON file.
pub fn read_matrix(path: &Path) -> GenericResult<DistanceMatrix> {
    let reader = BufReader::new(File::open(path)?);
    let matrix: DistanceMatrix = serde_json::from_reader(reader)
        .map_err(|err| format!("cannot read distance matrix from '{}': '{err}'", path.display()))?;

    // NOTE validate shape as the file can be edited externally
    DistanceMatrix::new(matrix.size, matrix.values)
}

/// Writes distance matrix as a JSON file.
pub fn write_matrix(path: &Path, matrix: &DistanceMatrix) -> GenericResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer(writer, matrix)
        .map_err(|err| format!("cannot write distance matrix to '{}': '{err}'", path.display()).into())
}
