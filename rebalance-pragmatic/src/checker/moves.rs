use super::*;
use rebalance_core::construction::rebalance;
use rebalance_core::models::{Station as CoreStation, StationPlan as CoreStationPlan};
use rebalance_core::prelude::Environment;
use std::sync::Arc;

/// Checks that every move has positive amount of vehicles, distinct known endpoints and correct distance.
pub fn check_moves(ctx: &CheckerContext) -> Result<(), String> {
    ctx.plan.moves.iter().try_for_each(|m| {
        if m.num_vehicles <= 0 {
            return Err(format!(
                "move from '{}' to '{}' has non-positive amount of vehicles",
                m.from_station_id, m.to_station_id
            ));
        }

        if m.from_station_id == m.to_station_id {
            return Err(format!("move has the same source and destination: '{}'", m.from_station_id));
        }

        let from = &ctx.core_problem.stations[ctx.get_station_idx(&m.from_station_id)?];
        let to = &ctx.core_problem.stations[ctx.get_station_idx(&m.to_station_id)?];
        let distance = from.location.distance_to_point(&to.location);

        if !is_close(distance, m.distance) {
            return Err(format!(
                "move from '{}' to '{}' has distance {}, expected {}",
                m.from_station_id, m.to_station_id, m.distance, distance
            ));
        }

        Ok(())
    })
}

/// Checks that moves transform current distribution into target one.
pub fn check_balance(ctx: &CheckerContext) -> Result<(), String> {
    let mut amounts = ctx
        .plan
        .stations
        .iter()
        .map(|station| (station.station_id.as_str(), station.vehicles_current))
        .collect::<HashMap<_, _>>();

    ctx.plan.moves.iter().try_for_each(|m| {
        let mut apply = |station_id: &str, amount: i64| {
            amounts
                .get_mut(station_id)
                .map(|current| *current += amount)
                .ok_or_else(|| format!("cannot find station with id '{station_id}' in the plan"))
        };

        apply(&m.from_station_id, -m.num_vehicles)?;
        apply(&m.to_station_id, m.num_vehicles)
    })?;

    ctx.plan.stations.iter().try_for_each(|station| {
        let actual = amounts.get(station.station_id.as_str()).copied().unwrap_or_default();
        if station.vehicles_target == actual {
            Ok(())
        } else {
            Err(format!(
                "station '{}' ends up with {} vehicles, but target is {}",
                station.station_id, actual, station.vehicles_target
            ))
        }
    })
}

/// Checks that total travel cost matches the moves and it is not greater than the optimal one.
pub fn check_cost(ctx: &CheckerContext) -> Result<(), String> {
    let actual = ctx.plan.moves.iter().map(|m| m.num_vehicles as f64 * m.distance).sum::<f64>();
    if !is_close(actual, ctx.plan.total_travel_cost) {
        return Err(format!("total travel cost is {}, but moves cost {}", ctx.plan.total_travel_cost, actual));
    }

    let stations = ctx
        .plan
        .stations
        .iter()
        .map(|station| CoreStationPlan {
            station: CoreStation::new(&station.station_id, station.lat, station.lon, station.vehicles_current),
            local_risk: station.local_risk,
            vehicles_target: station.vehicles_target,
        })
        .collect::<Vec<_>>();
    let environment = Environment { logger: Arc::new(|_| ()), ..Environment::default() };
    let optimal = rebalance(stations.as_slice(), &environment).map_err(|err| err.to_string())?;

    if actual > optimal.total_travel_cost && !is_close(actual, optimal.total_travel_cost) {
        Err(format!("total travel cost {} is greater than optimal {}", actual, optimal.total_travel_cost))
    } else {
        Ok(())
    }
}
