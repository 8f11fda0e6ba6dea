#[cfg(test)]
#[path = "../../tests/unit/construction/allocation_test.rs"]
mod allocation_test;

use crate::construction::StationRisk;
use crate::models::{Station, StationPlan};
use crate::utils::{Float, VehicleCount, compare_floats};

/// Computes target amount of vehicles per station proportionally to its local risk using largest
/// remainder (Hamilton's) method. The sum of targets is always equal to the total fleet size.
///
/// When there is no risk at all or no vehicles, current distribution is kept as is.
pub fn allocate_targets(stations: &[Station], station_risk: &StationRisk) -> Vec<StationPlan> {
    let total_vehicles: VehicleCount = stations.iter().map(|station| station.vehicles_current.max(0)).sum();
    let local_risks =
        stations.iter().map(|station| station_risk.get(station.id.as_str()).unwrap_or(0.)).collect::<Vec<_>>();

    let targets = match get_shares(local_risks.as_slice()) {
        Some(shares) if total_vehicles > 0 => apportion(total_vehicles, shares.as_slice()),
        _ => stations.iter().map(|station| station.vehicles_current).collect(),
    };

    stations
        .iter()
        .zip(local_risks)
        .zip(targets)
        .map(|((station, local_risk), vehicles_target)| StationPlan {
            station: station.clone(),
            local_risk,
            vehicles_target,
        })
        .collect()
}

/// Returns a share of the total risk per station or `None` when there is no risk at all. Risks are
/// rescaled by their maximum when their sum overflows, infinite risks split the whole fleet evenly.
fn get_shares(local_risks: &[Float]) -> Option<Vec<Float>> {
    let max_risk = local_risks.iter().fold(0., |acc: Float, &risk| acc.max(risk));
    if max_risk <= 0. {
        return None;
    }

    if max_risk.is_infinite() {
        let infinite = local_risks.iter().filter(|risk| risk.is_infinite()).count() as Float;
        return Some(local_risks.iter().map(|risk| if risk.is_infinite() { 1. / infinite } else { 0. }).collect());
    }

    let total_risk: Float = local_risks.iter().sum();
    let (local_risks, total_risk) = if total_risk.is_finite() {
        (local_risks.to_vec(), total_risk)
    } else {
        let scaled = local_risks.iter().map(|&risk| risk / max_risk).collect::<Vec<_>>();
        let total = scaled.iter().sum();
        (scaled, total)
    };

    Some(local_risks.iter().map(|&risk| if risk > 0. { risk / total_risk } else { 0. }).collect())
}

fn apportion(total_vehicles: VehicleCount, shares: &[Float]) -> Vec<VehicleCount> {
    let quotas = shares.iter().map(|&share| total_vehicles as Float * share).collect::<Vec<_>>();

    let mut targets =
        quotas.iter().map(|quota| (quota.floor() as VehicleCount).clamp(0, total_vehicles)).collect::<Vec<_>>();
    let remaining = total_vehicles - targets.iter().sum::<VehicleCount>();

    if remaining > 0 {
        let remainders =
            quotas.iter().zip(targets.iter()).map(|(&quota, &floor)| quota - floor as Float).collect::<Vec<_>>();

        // NOTE sort is stable: equal remainders keep roster order
        let mut order = (0..targets.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| compare_floats(remainders[b], remainders[a]));

        order.into_iter().take(remaining as usize).for_each(|idx| targets[idx] += 1);
    }

    targets
}
