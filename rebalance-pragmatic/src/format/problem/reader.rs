use super::*;
use crate::validation::ValidationContext;
use rebalance_core::models::{Cell as CoreCell, Station as CoreStation};
use rebalance_core::prelude::GenericError;
use std::io::{BufWriter, Write};

/// Deserializes problem in pragmatic json format.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<ApiProblem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            "check input json".to_string(),
            format!("{err}"),
        )
        .into()
    })
}

/// Serializes problem in pragmatic json format.
pub fn serialize_problem<W: Write>(problem: &ApiProblem, writer: BufWriter<W>) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, problem).map_err(|err| format!("cannot serialize problem: {err}").into())
}

pub(super) fn map_to_problem(problem: ApiProblem) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(&problem).validate()?;

    let cells = problem
        .cells
        .iter()
        .map(|cell| match (cell.lat, cell.lon) {
            (Some(lat), Some(lon)) => CoreCell::new(lat, lon, cell.risk()),
            _ => CoreCell { location: None, risk_value: cell.risk() },
        })
        .collect();

    let stations = problem
        .stations
        .iter()
        .map(|station| CoreStation::new(&station.station_id, station.lat, station.lon, station.vehicles_current))
        .collect();

    CoreProblem::new(cells, stations).map_err(MultiFormatError::from)
}
