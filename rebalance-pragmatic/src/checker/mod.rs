//! This module provides functionality to automatically check that given plan is valid for the
//! request: fleet size is preserved, moves transform current distribution into target one, targets
//! follow attributed risk and travel cost is minimal.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::{PragmaticProblem, Problem};
use crate::format::solution::Plan;
use rebalance_core::models::Problem as CoreProblem;
use std::collections::{HashMap, HashSet};

mod moves;
use self::moves::*;

mod stations;
use self::stations::*;

/// An absolute tolerance used to compare floating point values.
const TOLERANCE: f64 = 1E-6;

/// Stores request and plan together and provides some helper methods.
pub struct CheckerContext {
    /// An original request.
    pub problem: Problem,
    /// A plan to be checked.
    pub plan: Plan,

    core_problem: CoreProblem,
    station_index: HashMap<String, usize>,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(problem: Problem, plan: Plan) -> Result<Self, Vec<String>> {
        let core_problem = problem
            .clone()
            .read_pragmatic()
            .map_err(|errors| errors.into_iter().map(|err| err.to_string()).collect::<Vec<_>>())?;
        let station_index =
            problem.stations.iter().enumerate().map(|(idx, station)| (station.station_id.clone(), idx)).collect();

        Ok(Self { problem, plan, core_problem, station_index })
    }

    /// Performs plan check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_roster(self)
            .err()
            .into_iter()
            .chain(check_targets(self).err())
            .chain(check_moves(self).err())
            .chain(check_balance(self).err())
            .chain(check_cost(self).err())
            .fold((HashSet::new(), Vec::default()), |(mut used, mut errors), error| {
                if !used.contains(&error) {
                    errors.push(error.clone());
                    used.insert(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Gets station position in the roster by its id.
    fn get_station_idx(&self, station_id: &str) -> Result<usize, String> {
        self.station_index.get(station_id).copied().ok_or_else(|| format!("cannot find station with id '{station_id}'"))
    }
}

fn is_close(a: f64, b: f64) -> bool {
    rebalance_core::utils::is_close(a, b, TOLERANCE * a.abs().max(b.abs()).max(1.))
}
