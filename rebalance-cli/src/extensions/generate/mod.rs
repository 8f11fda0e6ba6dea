//! Generate command helpers.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rebalance_core::prelude::GenericError;
use rebalance_pragmatic::format::problem::*;

/// Specifies a rectangular area where stations and cells are placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    /// Min latitude.
    pub min_lat: f64,
    /// Min longitude.
    pub min_lon: f64,
    /// Max latitude.
    pub max_lat: f64,
    /// Max longitude.
    pub max_lon: f64,
}

/// A default area.
pub const DEFAULT_AREA: Area = Area { min_lat: 47.50, min_lon: -122.45, max_lat: 47.75, max_lon: -122.20 };

/// A probability of a cell to have no risk.
const ZERO_RISK_PROBABILITY: f64 = 0.3;

/// A max risk value of the cell.
const MAX_RISK: f64 = 5.;

/// A max amount of vehicles per station when fleet size is not specified.
const MAX_STATION_VEHICLES: i64 = 10;

impl Area {
    /// Parses area from string in form "min_lat,min_lon,max_lat,max_lon".
    pub fn parse(value: &str) -> Result<Self, GenericError> {
        let values = value
            .split(',')
            .map(|item| item.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("cannot parse area '{value}': '{err}'"))?;

        match values.as_slice() {
            &[min_lat, min_lon, max_lat, max_lon]
                if values.iter().all(|v| v.is_finite()) && min_lat < max_lat && min_lon < max_lon =>
            {
                Ok(Self { min_lat, min_lon, max_lat, max_lon })
            }
            _ => Err(format!("area should be specified as 'min_lat,min_lon,max_lat,max_lon', got: '{value}'").into()),
        }
    }

    fn random_location(&self, rng: &mut SmallRng) -> (f64, f64) {
        (rng.gen_range(self.min_lat..self.max_lat), rng.gen_range(self.min_lon..self.max_lon))
    }
}

/// Generates a pragmatic request with random stations and cells within given area.
pub fn generate_problem(
    stations_size: usize,
    cells_size: usize,
    vehicles_size: Option<usize>,
    area: Option<Area>,
    seed: Option<u64>,
) -> Result<Problem, GenericError> {
    if stations_size == 0 {
        return Err("amount of stations should be greater than zero".into());
    }

    let area = area.unwrap_or(DEFAULT_AREA);
    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let mut stations = (0..stations_size)
        .map(|idx| {
            let (lat, lon) = area.random_location(&mut rng);
            Station { station_id: format!("station{idx}"), lat, lon, vehicles_current: 0 }
        })
        .collect::<Vec<_>>();

    match vehicles_size {
        Some(vehicles_size) => (0..vehicles_size).for_each(|_| {
            let idx = rng.gen_range(0..stations.len());
            stations[idx].vehicles_current += 1;
        }),
        None => stations.iter_mut().for_each(|station| {
            station.vehicles_current = rng.gen_range(0..=MAX_STATION_VEHICLES);
        }),
    }

    let cells = (0..cells_size)
        .map(|idx| {
            let (lat, lon) = area.random_location(&mut rng);
            let risk_value =
                if rng.gen_bool(ZERO_RISK_PROBABILITY) { 0. } else { rng.gen_range(0. ..1.) * MAX_RISK };

            Cell {
                cell_id: Some(CellId::Text(format!("cell{idx}"))),
                lat: Some(lat),
                lon: Some(lon),
                risk_value: Some(risk_value),
                risk_score: None,
            }
        })
        .collect();

    Ok(Problem { fleet_type: DEFAULT_FLEET_TYPE.to_string(), timestamp: None, cells, stations })
}
