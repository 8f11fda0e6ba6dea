//! A fleet rebalancing library public API.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;

use crate::extensions::solve::config::{Config, create_environment_from_config};
use rebalance_core::prelude::{GenericError, Solver};
use rebalance_pragmatic::format::MultiFormatError;
use rebalance_pragmatic::format::problem::{PragmaticProblem, Problem};
use rebalance_pragmatic::format::solution::PragmaticSolution;
use std::io::BufWriter;
use std::sync::Arc;

/// Returns serialized into json list of format errors.
pub fn get_errors_serialized(errors: &MultiFormatError) -> String {
    errors.to_json()
}

/// Solves pragmatic problem using given configuration and returns plan serialized into json.
pub fn get_plan_serialized(problem: Problem, config: &Config) -> Result<String, GenericError> {
    let environment = create_environment_from_config(config)?;
    let core_problem = problem.clone().read_pragmatic().map_err(|errors| get_errors_serialized(&errors))?;

    let plan = Solver::new(Arc::new(environment))
        .solve(&core_problem)
        .map_err(|err| get_errors_serialized(&MultiFormatError::from(err)))?;

    let mut buffer = Vec::new();
    plan.write_pragmatic_json(&problem, BufWriter::new(&mut buffer))?;

    String::from_utf8(buffer).map_err(|err| format!("cannot convert plan to string: '{err}'").into())
}
