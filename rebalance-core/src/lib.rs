//! Core crate contains building blocks to rebalance a vehicle fleet between stations.
//!
//! The pipeline consists of three pure steps:
//! - **risk attribution**: every risk bearing grid cell is assigned to its nearest station;
//! - **target allocation**: the fleet is apportioned between stations proportionally to their risk
//!   using largest remainder method, so the fleet size is preserved exactly;
//! - **rebalancing**: the cheapest set of integer vehicle moves is found by solving a transportation
//!   problem with min-cost flow.
//!
//! `solver::Solver` sequences these steps and assembles the resulting `models::Plan`.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
