//! This module contains the solver which sequences pipeline steps into a rebalancing plan.
//!
//! # Examples
//!
//! ```
//! use rebalance_core::prelude::*;
//! use std::sync::Arc;
//!
//! let cells = vec![Cell::new(0., 1., 1.)];
//! let stations = vec![Station::new("A", 0., 0., 10), Station::new("B", 0., 1., 0)];
//! let problem = Problem::new(cells, stations)?;
//!
//! let environment = Environment { logger: Arc::new(|_| ()), ..Environment::default() };
//! let plan = Solver::new(Arc::new(environment)).solve(&problem)?;
//!
//! assert_eq!(plan.moves.len(), 1);
//! assert_eq!(plan.total_travel_cost, 10.);
//! # Ok::<(), RebalanceError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::{allocate_targets, attribute_risk, rebalance};
use crate::models::{Plan, Problem, validate_stations};
use crate::utils::{Environment, RebalanceResult, Timer};
use std::sync::Arc;

/// Solves rebalancing problem: attributes risk to stations, allocates target amount of vehicles and
/// finds the cheapest set of moves. The solver keeps no state between calls.
#[derive(Clone)]
pub struct Solver {
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }

    /// Builds a rebalancing plan for given problem.
    pub fn solve(&self, problem: &Problem) -> RebalanceResult<Plan> {
        let logger = self.environment.logger.as_ref();
        let timer = Timer::start();

        validate_stations(problem.stations.as_slice())?;

        logger(&format!(
            "rebalancing fleet of {} vehicles between {} stations using {} cells",
            problem.total_vehicles(),
            problem.stations.len(),
            problem.cells.len()
        ));

        let station_risk =
            attribute_risk(problem.cells.as_slice(), problem.stations.as_slice(), self.environment.is_parallel)?;
        logger(&format!("attributed total risk: {:.6}", station_risk.total()));

        let stations = allocate_targets(problem.stations.as_slice(), &station_risk);
        let (surplus, deficit) = stations.iter().fold((0, 0), |(surplus, deficit), station| {
            (surplus + station.delta().max(0), deficit + (-station.delta()).max(0))
        });
        logger(&format!("allocated targets: {surplus} vehicles in surplus, {deficit} vehicles in deficit"));

        let rebalancing = rebalance(stations.as_slice(), self.environment.as_ref())?;
        logger(&format!(
            "found {} moves with total travel cost {:.6} using {} augmentations in {}ms",
            rebalancing.moves.len(),
            rebalancing.total_travel_cost,
            rebalancing.augmentations,
            timer.elapsed_millis()
        ));

        Ok(Plan { stations, moves: rebalancing.moves, total_travel_cost: rebalancing.total_travel_cost })
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}
