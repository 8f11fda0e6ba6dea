#[cfg(test)]
#[path = "../../tests/unit/construction/attribution_test.rs"]
mod attribution_test;

use crate::algorithms::geometry::Point;
use crate::models::{Cell, Station};
use crate::utils::{Float, RebalanceError, RebalanceResult, maybe_parallel_collect};
use rustc_hash::FxHashMap;

/// Keeps risk attributed to each station of the roster.
#[derive(Clone, Debug)]
pub struct StationRisk {
    risks: Vec<Float>,
    index: FxHashMap<String, usize>,
}

impl StationRisk {
    /// Creates a new instance of `StationRisk` with zero risk for every station.
    pub fn new(stations: &[Station]) -> Self {
        let index = stations.iter().enumerate().map(|(idx, station)| (station.id.clone(), idx)).collect();

        Self { risks: vec![0.; stations.len()], index }
    }

    /// Returns risk attributed to the station with given id.
    pub fn get(&self, station_id: &str) -> Option<Float> {
        self.index.get(station_id).map(|&idx| self.risks[idx])
    }

    /// Returns risks in roster order.
    pub fn as_slice(&self) -> &[Float] {
        self.risks.as_slice()
    }

    /// Returns total attributed risk.
    pub fn total(&self) -> Float {
        self.risks.iter().sum()
    }

    fn add(&mut self, station_idx: usize, risk: Float) {
        self.risks[station_idx] += risk;
    }
}

/// Attributes the risk of each cell to its nearest station. Cells without location or positive
/// risk are skipped. Summation follows cell order regardless of `is_parallel` flag, so the result is
/// reproducible bit by bit.
pub fn attribute_risk(cells: &[Cell], stations: &[Station], is_parallel: bool) -> RebalanceResult<StationRisk> {
    if stations.is_empty() {
        return Err(RebalanceError::InvalidInput("cannot attribute risk without stations".to_string()));
    }

    let nearest = maybe_parallel_collect(cells, is_parallel, |cell| {
        cell.risk_location().and_then(|location| find_nearest_station(location, stations))
    });

    Ok(cells.iter().zip(nearest).fold(StationRisk::new(stations), |mut station_risk, (cell, station_idx)| {
        if let Some(station_idx) = station_idx {
            station_risk.add(station_idx, cell.risk_value);
        }

        station_risk
    }))
}

/// Finds index of the nearest station to given location. On equal distances, the station which is
/// the earliest in the roster wins.
pub fn find_nearest_station(location: &Point, stations: &[Station]) -> Option<usize> {
    stations
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Float)>, (idx, station)| {
            let distance = location.distance_to_point(&station.location);
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ if distance.is_nan() => best,
                _ => Some((idx, distance)),
            }
        })
        .map(|(idx, _)| idx)
}
