#[cfg(test)]
#[path = "../../../tests/unit/algorithms/flow/min_cost_flow_test.rs"]
mod min_cost_flow_test;

use super::{EdgeId, FlowNetwork, NodeId};
use crate::utils::{Float, Quota, RebalanceError, RebalanceResult, compare_floats};
use std::sync::Arc;

/// Keeps summary of min-cost flow run.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowSummary {
    /// Total amount of flow routed from source to sink.
    pub flow: i64,
    /// Total cost of the flow.
    pub cost: Float,
    /// Amount of augmenting paths used.
    pub augmentations: usize,
}

/// Solves min-cost flow problem with successive shortest augmenting paths. Initial node potentials
/// are found by Bellman-Ford, after that each cheapest path is found by Dijkstra on reduced costs
/// and potentials are updated after every augmentation, so reduced costs stay non-negative even
/// when residual edges have negative costs.
pub struct MinCostFlow {
    max_iterations: usize,
    quota: Option<Arc<dyn Quota>>,
}

impl MinCostFlow {
    /// Creates a new instance of `MinCostFlow`.
    pub fn new(max_iterations: usize, quota: Option<Arc<dyn Quota>>) -> Self {
        Self { max_iterations, quota }
    }

    /// Routes `required` amount of flow from `source` to `sink` with minimum cost. Fails with
    /// `SolverInfeasible` when the network cannot carry required flow and with `SolverTimeout`
    /// when iteration or time quota is exhausted.
    pub fn solve(
        &self,
        network: &mut FlowNetwork,
        source: NodeId,
        sink: NodeId,
        required: i64,
    ) -> RebalanceResult<FlowSummary> {
        let mut summary = FlowSummary { flow: 0, cost: 0., augmentations: 0 };
        if required <= 0 {
            return Ok(summary);
        }

        let mut potentials = get_initial_potentials(network, source)?;

        while summary.flow < required {
            if summary.augmentations >= self.max_iterations {
                return Err(RebalanceError::SolverTimeout(format!(
                    "max iterations limit of {} is reached, routed {} of {} vehicles",
                    self.max_iterations, summary.flow, required
                )));
            }

            if self.quota.as_ref().is_some_and(|quota| quota.is_reached()) {
                return Err(RebalanceError::SolverTimeout(format!(
                    "time quota is reached after {} iterations, routed {} of {} vehicles",
                    summary.augmentations, summary.flow, required
                )));
            }

            let (distances, parents) = find_shortest_paths(network, source, &potentials);
            if !distances[sink].is_finite() {
                break;
            }

            potentials.iter_mut().zip(distances.iter()).filter(|(_, distance)| distance.is_finite()).for_each(
                |(potential, distance)| {
                    *potential += *distance;
                },
            );

            let path = get_path(network, &parents, source, sink);
            let amount = path
                .iter()
                .map(|&edge_id| network.edge(edge_id).residual())
                .fold(required - summary.flow, |acc, residual| acc.min(residual));

            path.iter().for_each(|&edge_id| network.push(edge_id, amount));

            summary.cost += amount as Float * path.iter().map(|&edge_id| network.edge(edge_id).cost).sum::<Float>();
            summary.flow += amount;
            summary.augmentations += 1;
        }

        if summary.flow < required {
            return Err(RebalanceError::SolverInfeasible(format!(
                "cannot route required flow: routed {} of {}",
                summary.flow, required
            )));
        }

        Ok(summary)
    }
}

/// Finds shortest distances from source using Bellman-Ford over residual edges. Unreachable nodes
/// get zero potential: they cannot become reachable later as augmentations add residual edges only
/// between reachable nodes.
fn get_initial_potentials(network: &FlowNetwork, source: NodeId) -> RebalanceResult<Vec<Float>> {
    let size = network.size();
    let mut distances = vec![Float::INFINITY; size];
    distances[source] = 0.;

    for _ in 0..size {
        let mut is_updated = false;

        for edge in network.edges().iter().filter(|edge| edge.residual() > 0) {
            let candidate = distances[edge.from] + edge.cost;
            if distances[edge.from].is_finite() && candidate < distances[edge.to] {
                distances[edge.to] = candidate;
                is_updated = true;
            }
        }

        if !is_updated {
            return Ok(distances.into_iter().map(|distance| if distance.is_finite() { distance } else { 0. }).collect());
        }
    }

    Err(RebalanceError::SolverInfeasible("residual network contains a negative cost cycle".to_string()))
}

/// Runs Dijkstra on reduced costs. Uses dense node selection: the network is small and dense, and
/// selecting the lowest index among equally distant nodes keeps the result deterministic.
fn find_shortest_paths(
    network: &FlowNetwork,
    source: NodeId,
    potentials: &[Float],
) -> (Vec<Float>, Vec<Option<EdgeId>>) {
    let size = network.size();
    let mut distances = vec![Float::INFINITY; size];
    let mut parents = vec![None; size];
    let mut visited = vec![false; size];

    distances[source] = 0.;

    while let Some(node) = select_closest(&distances, &visited) {
        visited[node] = true;

        for &edge_id in network.outgoing(node) {
            let edge = network.edge(edge_id);
            if edge.residual() <= 0 || visited[edge.to] {
                continue;
            }

            // NOTE reduced cost is non-negative in exact arithmetic, clamp rounding noise
            let reduced_cost = (edge.cost + potentials[node] - potentials[edge.to]).max(0.);
            let candidate = distances[node] + reduced_cost;

            if candidate < distances[edge.to] {
                distances[edge.to] = candidate;
                parents[edge.to] = Some(edge_id);
            }
        }
    }

    (distances, parents)
}

/// Returns unvisited reachable node with minimum distance, the first one on ties.
fn select_closest(distances: &[Float], visited: &[bool]) -> Option<NodeId> {
    (0..distances.len())
        .filter(|&node| !visited[node] && distances[node].is_finite())
        .min_by(|&a, &b| compare_floats(distances[a], distances[b]))
}

fn get_path(network: &FlowNetwork, parents: &[Option<EdgeId>], source: NodeId, sink: NodeId) -> Vec<EdgeId> {
    let mut path = Vec::default();
    let mut node = sink;

    while node != source {
        match parents[node] {
            Some(edge_id) => {
                path.push(edge_id);
                node = network.edge(edge_id).from;
            }
            None => break,
        }
    }

    path.reverse();

    path
}
