use super::*;
use rebalance_core::construction::{allocate_targets, attribute_risk};

/// Checks that plan lists every station from the roster once, in roster order and unchanged.
pub fn check_roster(ctx: &CheckerContext) -> Result<(), String> {
    if ctx.plan.stations.len() != ctx.problem.stations.len() {
        return Err(format!(
            "plan has {} stations, but request has {}",
            ctx.plan.stations.len(),
            ctx.problem.stations.len()
        ));
    }

    ctx.problem.stations.iter().zip(ctx.plan.stations.iter()).try_for_each(|(expected, actual)| {
        if expected.station_id != actual.station_id {
            return Err(format!("expected station '{}', got '{}'", expected.station_id, actual.station_id));
        }

        if expected.vehicles_current != actual.vehicles_current
            || !is_close(expected.lat, actual.lat)
            || !is_close(expected.lon, actual.lon)
        {
            return Err(format!("station '{}' differs from the request", actual.station_id));
        }

        Ok(())
    })
}

/// Checks that targets are non-negative, preserve fleet size and follow the risk attributed to stations.
pub fn check_targets(ctx: &CheckerContext) -> Result<(), String> {
    if let Some(station) = ctx.plan.stations.iter().find(|station| station.vehicles_target < 0) {
        return Err(format!("station '{}' has negative target: {}", station.station_id, station.vehicles_target));
    }

    let total_current = ctx.plan.stations.iter().map(|station| station.vehicles_current).sum::<i64>();
    let total_target = ctx.plan.stations.iter().map(|station| station.vehicles_target).sum::<i64>();
    if total_current != total_target {
        return Err(format!("fleet size is not preserved: current is {total_current}, target is {total_target}"));
    }

    let station_risk = attribute_risk(ctx.core_problem.cells.as_slice(), ctx.core_problem.stations.as_slice(), false)
        .map_err(|err| err.to_string())?;
    let expected = allocate_targets(ctx.core_problem.stations.as_slice(), &station_risk);

    expected.iter().zip(ctx.plan.stations.iter()).try_for_each(|(expected, actual)| {
        if !is_close(expected.local_risk, actual.local_risk) {
            return Err(format!(
                "station '{}' has local risk {}, expected {}",
                actual.station_id, actual.local_risk, expected.local_risk
            ));
        }

        if expected.vehicles_target != actual.vehicles_target {
            return Err(format!(
                "station '{}' has target {}, expected {}",
                actual.station_id, actual.vehicles_target, expected.vehicles_target
            ));
        }

        Ok(())
    })
}
