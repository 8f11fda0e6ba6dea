use crate::format::problem::*;

pub fn create_station(id: &str, (lat, lon): (f64, f64), vehicles_current: i64) -> Station {
    Station { station_id: id.to_string(), lat, lon, vehicles_current }
}

pub fn create_cell((lat, lon): (f64, f64), risk_value: f64) -> Cell {
    Cell { lat: Some(lat), lon: Some(lon), risk_value: Some(risk_value), ..Cell::default() }
}

pub fn create_problem(cells: Vec<Cell>, stations: Vec<Station>) -> Problem {
    Problem { fleet_type: DEFAULT_FLEET_TYPE.to_string(), timestamp: None, cells, stations }
}

pub fn create_problem_from_json(json: &str) -> Problem {
    deserialize_problem(std::io::BufReader::new(json.as_bytes()))
        .unwrap_or_else(|err| panic!("cannot deserialize problem: {err}"))
}
