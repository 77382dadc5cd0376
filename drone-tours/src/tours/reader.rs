use super::ToursReport;
use std::io::{BufReader, Read};
use vrp_core::prelude::GenericResult;

/// Reads tours report from json.
pub trait ToursReportReader {
    /// Reads tours report.
    fn read_tours_report(self) -> GenericResult<ToursReport>;
}

impl<R: Read> ToursReportReader for BufReader<R> {
    fn read_tours_report(self) -> GenericResult<ToursReport> {
        serde_json::from_reader(self).map_err(|err| format!("cannot deserialize tours report: '{err}'").into())
    }
}

impl ToursReportReader for String {
    fn read_tours_report(self) -> GenericResult<ToursReport> {
        serde_json::from_str(self.as_str()).map_err(|err| format!("cannot deserialize tours report: '{err}'").into())
    }
}
