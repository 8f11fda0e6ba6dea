//! Pragmatic crate exposes fleet rebalancing via simple **pragmatic** json format: a request with
//! a risk snapshot and a station roster goes in, a plan with station targets and vehicle moves
//! goes out.
//!
//! # Examples
//!
//! ```
//! use rebalance_pragmatic::core::prelude::*;
//! use rebalance_pragmatic::format::problem::{PragmaticProblem, deserialize_problem};
//! use rebalance_pragmatic::format::solution::PragmaticSolution;
//! use std::io::{BufReader, BufWriter};
//! use std::sync::Arc;
//!
//! let request = r#"{
//!   "cells": [ { "lat": 0.0, "lon": 1.0, "risk_value": 1.0 } ],
//!   "stations": [
//!     { "station_id": "A", "lat": 0.0, "lon": 0.0, "vehicles_current": 10 },
//!     { "station_id": "B", "lat": 0.0, "lon": 1.0, "vehicles_current": 0 }
//!   ]
//! }"#;
//!
//! let api_problem = deserialize_problem(BufReader::new(request.as_bytes())).expect("invalid request");
//! let problem = api_problem.clone().read_pragmatic().expect("invalid request");
//!
//! let environment = Environment { logger: Arc::new(|_| ()), ..Environment::default() };
//! let plan = Solver::new(Arc::new(environment)).solve(&problem).expect("cannot solve");
//!
//! let mut buffer = Vec::new();
//! plan.write_pragmatic_json(&api_problem, BufWriter::new(&mut buffer)).expect("cannot write plan");
//!
//! assert!(String::from_utf8(buffer).unwrap().contains("\"total_travel_cost\": 10.0"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub use rebalance_core as core;

pub mod checker;
pub mod format;

mod validation;
