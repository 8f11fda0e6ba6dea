//! A helper module which contains functionality to run checks on rebalancing plan.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use rebalance_pragmatic::checker::CheckerContext;
use rebalance_pragmatic::format::problem::deserialize_problem;
use rebalance_pragmatic::format::solution::deserialize_plan;
use std::io::{BufReader, Read};

/// Checks pragmatic plan against the request it was created for.
pub fn check_pragmatic_plan<R1: Read, R2: Read>(
    problem_reader: BufReader<R1>,
    plan_reader: BufReader<R2>,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader)
        .map_err(|errors| vec![format!("cannot read problem: '{}'", errors.to_json())])?;
    let plan =
        deserialize_plan(plan_reader).map_err(|errors| vec![format!("cannot read plan: '{}'", errors.to_json())])?;

    CheckerContext::new(problem, plan)?.check()
}
