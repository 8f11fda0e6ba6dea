#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::algorithms::geometry::Point;
use crate::utils::{Float, RebalanceError, RebalanceResult, VehicleCount};
use rustc_hash::FxHashSet;

/// A grid cell which carries a risk weight, e.g. an expected amount of incidents.
#[derive(Clone, Debug)]
pub struct Cell {
    /// Cell location, cells without location are ignored.
    pub location: Option<Point>,
    /// A non-negative risk weight, treated as opaque.
    pub risk_value: Float,
}

impl Cell {
    /// Creates a new instance of `Cell`.
    pub fn new(lat: Float, lon: Float, risk_value: Float) -> Self {
        Self { location: Some(Point::new(lat, lon)), risk_value }
    }

    /// Returns cell location if the cell carries some positive risk.
    pub fn risk_location(&self) -> Option<&Point> {
        if self.risk_value.is_finite() && self.risk_value > 0. { self.location.as_ref() } else { None }
    }
}

/// A station holding some amount of vehicles.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    /// Unique station id.
    pub id: String,
    /// Station location.
    pub location: Point,
    /// Amount of vehicles currently placed at the station.
    pub vehicles_current: VehicleCount,
}

impl Station {
    /// Creates a new instance of `Station`.
    pub fn new(id: &str, lat: Float, lon: Float, vehicles_current: VehicleCount) -> Self {
        Self { id: id.to_string(), location: Point::new(lat, lon), vehicles_current }
    }
}

/// Defines a rebalancing problem: a risk snapshot and a station roster. Both lists are ordered and
/// their order pins all tie-breaks.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Risk snapshot.
    pub cells: Vec<Cell>,
    /// Station roster.
    pub stations: Vec<Station>,
}

impl Problem {
    /// Creates a new instance of `Problem` validating the station roster.
    pub fn new(cells: Vec<Cell>, stations: Vec<Station>) -> RebalanceResult<Self> {
        validate_stations(stations.as_slice())?;

        Ok(Self { cells, stations })
    }

    /// Returns total fleet size.
    pub fn total_vehicles(&self) -> VehicleCount {
        self.stations.iter().map(|station| station.vehicles_current.max(0)).sum()
    }
}

/// Validates station roster: it should be non-empty, with unique ids and non-negative vehicle counts.
pub fn validate_stations(stations: &[Station]) -> RebalanceResult<()> {
    if stations.is_empty() {
        return Err(RebalanceError::InvalidInput("station roster is empty".to_string()));
    }

    let mut ids = FxHashSet::default();
    if let Some(station) = stations.iter().find(|station| !ids.insert(station.id.as_str())) {
        return Err(RebalanceError::InvalidInput(format!("duplicated station id: '{}'", station.id)));
    }

    if let Some(station) = stations.iter().find(|station| station.vehicles_current < 0) {
        return Err(RebalanceError::InvalidInput(format!(
            "negative amount of vehicles at station '{}': {}",
            station.id, station.vehicles_current
        )));
    }

    Ok(())
}
