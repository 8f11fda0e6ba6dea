use super::*;
use serde::Deserialize;
use std::io::{BufReader, BufWriter, Read, Write};

/// A station annotated with attributed risk and target amount of vehicles.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct StationPlan {
    /// A station id.
    pub station_id: String,
    /// A station latitude.
    pub lat: f64,
    /// A station longitude.
    pub lon: f64,
    /// Amount of vehicles at the station before rebalancing.
    pub vehicles_current: i64,
    /// Amount of vehicles at the station after rebalancing.
    pub vehicles_target: i64,
    /// A sum of risk attributed to the station.
    pub local_risk: f64,
}

/// A vehicle move between two stations.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Move {
    /// Id of the station vehicles are taken from.
    pub from_station_id: String,
    /// Id of the station vehicles are moved to.
    pub to_station_id: String,
    /// Amount of moved vehicles.
    pub num_vehicles: i64,
    /// Planar distance between stations.
    pub distance: f64,
}

/// A rebalancing plan.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Plan {
    /// A fleet type from the request.
    pub fleet_type: String,
    /// A risk snapshot timestamp from the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Stations in roster order.
    pub stations: Vec<StationPlan>,
    /// Moves ordered by source station, then by destination station.
    pub moves: Vec<Move>,
    /// A sum of `num_vehicles * distance` over all moves.
    pub total_travel_cost: f64,
}

/// Serializes plan into json format.
pub fn serialize_plan<W: Write>(writer: BufWriter<W>, plan: &Plan) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, plan)
}

/// Deserializes plan from json format.
pub fn deserialize_plan<R: Read>(reader: BufReader<R>) -> Result<Plan, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0001".to_string(),
            "cannot deserialize plan".to_string(),
            "check plan json".to_string(),
            format!("{err}"),
        )
        .into()
    })
}
