#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::format::problem::Problem as ApiProblem;
use rebalance_core::models::Plan as CorePlan;
use rebalance_core::prelude::GenericError;
use std::io::{BufWriter, Write};

/// A trait to serialize plan in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes plan in pragmatic json format.
    fn write_pragmatic_json(&self, problem: &ApiProblem, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> PragmaticSolution<W> for CorePlan {
    fn write_pragmatic_json(&self, problem: &ApiProblem, writer: BufWriter<W>) -> Result<(), GenericError> {
        let plan = create_plan(problem, self);
        serialize_plan(writer, &plan).map_err(|err| format!("cannot write plan: {err}").into())
    }
}

/// Creates plan in pragmatic format from core plan.
pub fn create_plan(problem: &ApiProblem, plan: &CorePlan) -> Plan {
    let stations = plan
        .stations
        .iter()
        .map(|station_plan| StationPlan {
            station_id: station_plan.station.id.clone(),
            lat: station_plan.station.location.lat,
            lon: station_plan.station.location.lon,
            vehicles_current: station_plan.station.vehicles_current,
            vehicles_target: station_plan.vehicles_target,
            local_risk: station_plan.local_risk,
        })
        .collect();

    let moves = plan
        .moves
        .iter()
        .map(|m| Move {
            from_station_id: m.from_station_id.clone(),
            to_station_id: m.to_station_id.clone(),
            num_vehicles: m.num_vehicles,
            distance: m.distance,
        })
        .collect();

    Plan {
        fleet_type: problem.fleet_type.clone(),
        timestamp: problem.timestamp.clone(),
        stations,
        moves,
        total_travel_cost: plan.total_travel_cost,
    }
}
