#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// A default fleet type.
pub const DEFAULT_FLEET_TYPE: &str = "fire";

/// A cell id which risk grids emit either as a number or as a string.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum CellId {
    /// A numeric id.
    Number(i64),
    /// A textual id.
    Text(String),
}

/// A grid cell from risk snapshot.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Cell {
    /// An optional cell id, used only for reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<CellId>,
    /// A cell latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// A cell longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// A risk weight, e.g. expected amount of incidents.
    #[serde(alias = "expected_incidents", skip_serializing_if = "Option::is_none")]
    pub risk_value: Option<f64>,
    /// A fallback risk weight used when `risk_value` is not specified.
    #[serde(alias = "risk", skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
}

impl Cell {
    /// Returns cell risk: `risk_value` when present, `risk_score` otherwise, zero when neither is set.
    pub fn risk(&self) -> f64 {
        self.risk_value.or(self.risk_score).unwrap_or(0.)
    }
}

/// A station from the roster.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Station {
    /// A unique station id.
    pub station_id: String,
    /// A station latitude.
    pub lat: f64,
    /// A station longitude.
    pub lon: f64,
    /// Amount of vehicles currently placed at the station.
    pub vehicles_current: i64,
}

/// A rebalancing request.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Problem {
    /// A fleet type, echoed into the plan.
    #[serde(default = "default_fleet_type")]
    pub fleet_type: String,
    /// A risk snapshot timestamp, echoed into the plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Risk snapshot.
    #[serde(default)]
    pub cells: Vec<Cell>,
    /// Station roster.
    #[serde(default)]
    pub stations: Vec<Station>,
}

fn default_fleet_type() -> String {
    DEFAULT_FLEET_TYPE.to_string()
}
