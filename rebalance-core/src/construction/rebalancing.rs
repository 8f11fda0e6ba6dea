#[cfg(test)]
#[path = "../../tests/unit/construction/rebalancing_test.rs"]
mod rebalancing_test;

use crate::algorithms::flow::{FlowNetwork, MinCostFlow, UNBOUNDED_CAPACITY};
use crate::models::{Move, StationPlan};
use crate::utils::{Environment, Float, RebalanceError, RebalanceResult, VehicleCount};

const SOURCE: usize = 0;
const SINK: usize = 1;

/// A result of rebalancing step.
#[derive(Clone, Debug, Default)]
pub struct Rebalancing {
    /// Moves which transform current distribution into target one.
    pub moves: Vec<Move>,
    /// A sum of move costs.
    pub total_travel_cost: Float,
    /// Amount of augmenting paths used by the flow solver.
    pub augmentations: usize,
}

/// Finds the cheapest set of moves which transforms current distribution of vehicles into target
/// one. The problem is a transportation problem: surplus stations supply vehicles, deficit stations
/// demand them, every surplus station can send any amount to every deficit station with cost equal
/// to planar distance. It is solved as min-cost flow from super source to super sink.
pub fn rebalance(stations: &[StationPlan], environment: &Environment) -> RebalanceResult<Rebalancing> {
    let total_delta: VehicleCount = stations.iter().map(|station| station.delta()).sum();
    if total_delta != 0 {
        return Err(RebalanceError::ConservationViolation(format!(
            "current and target fleet sizes differ by {total_delta} vehicles"
        )));
    }

    let surplus = stations.iter().filter(|station| station.delta() > 0).collect::<Vec<_>>();
    let deficit = stations.iter().filter(|station| station.delta() < 0).collect::<Vec<_>>();

    if surplus.is_empty() && deficit.is_empty() {
        return Ok(Rebalancing::default());
    }

    let mut network = FlowNetwork::new(2 + surplus.len() + deficit.len());
    let surplus_node = |idx: usize| 2 + idx;
    let deficit_node = |idx: usize| 2 + surplus.len() + idx;

    surplus.iter().enumerate().for_each(|(idx, station)| {
        network.add_edge(SOURCE, surplus_node(idx), station.delta(), 0.);
    });
    deficit.iter().enumerate().for_each(|(idx, station)| {
        network.add_edge(deficit_node(idx), SINK, -station.delta(), 0.);
    });

    let transport_edges = surplus
        .iter()
        .enumerate()
        .flat_map(|(from_idx, from)| deficit.iter().enumerate().map(move |(to_idx, to)| (from_idx, from, to_idx, to)))
        .map(|(from_idx, from, to_idx, to)| {
            let distance = from.station.location.distance_to_point(&to.station.location);
            let edge_id = network.add_edge(surplus_node(from_idx), deficit_node(to_idx), UNBOUNDED_CAPACITY, distance);

            (edge_id, *from, *to, distance)
        })
        .collect::<Vec<_>>();

    let required = surplus.iter().map(|station| station.delta()).sum();
    let summary = MinCostFlow::new(environment.max_iterations, environment.quota.clone()).solve(
        &mut network,
        SOURCE,
        SINK,
        required,
    )?;

    let moves = transport_edges
        .into_iter()
        .filter_map(|(edge_id, from, to, distance)| {
            let num_vehicles = network.edge(edge_id).flow();
            (num_vehicles > 0).then(|| Move {
                from_station_id: from.station.id.clone(),
                to_station_id: to.station.id.clone(),
                num_vehicles,
                distance,
            })
        })
        .collect::<Vec<_>>();

    let total_travel_cost = moves.iter().map(|m| m.cost()).sum();

    Ok(Rebalancing { moves, total_travel_cost, augmentations: summary.augmentations })
}
