use crate::utils::{DEFAULT_MAX_ITERATIONS, Environment, InfoLogger, Quota};
use std::sync::Arc;

pub fn test_logger() -> InfoLogger {
    Arc::new(|_| ())
}

pub fn test_environment() -> Environment {
    Environment::new(None, DEFAULT_MAX_ITERATIONS, false, test_logger())
}

pub fn test_parallel_environment() -> Environment {
    Environment::new(None, DEFAULT_MAX_ITERATIONS, true, test_logger())
}

/// A quota which is reached from the very beginning.
pub struct ReachedQuota;

impl Quota for ReachedQuota {
    fn is_reached(&self) -> bool {
        true
    }
}

/// Finds the minimum transportation cost by enumerating all integer flows, for tiny instances only.
pub fn brute_force_transportation_cost(supplies: &[i64], demands: &[i64], costs: &[Vec<f64>]) -> f64 {
    fn search(supply_idx: usize, supplies: &[i64], demands: &mut [i64], costs: &[Vec<f64>]) -> f64 {
        if supply_idx == supplies.len() {
            return if demands.iter().all(|&d| d == 0) { 0. } else { f64::INFINITY };
        }

        distribute(supply_idx, 0, supplies[supply_idx], supplies, demands, costs)
    }

    fn distribute(
        supply_idx: usize,
        demand_idx: usize,
        left: i64,
        supplies: &[i64],
        demands: &mut [i64],
        costs: &[Vec<f64>],
    ) -> f64 {
        if demand_idx == demands.len() {
            return if left == 0 { search(supply_idx + 1, supplies, demands, costs) } else { f64::INFINITY };
        }

        (0..=left.min(demands[demand_idx]))
            .map(|amount| {
                demands[demand_idx] -= amount;
                let cost = amount as f64 * costs[supply_idx][demand_idx]
                    + distribute(supply_idx, demand_idx + 1, left - amount, supplies, demands, costs);
                demands[demand_idx] += amount;

                cost
            })
            .fold(f64::INFINITY, f64::min)
    }

    search(0, supplies, &mut demands.to_vec(), costs)
}
