//! A collection of models to represent the rebalancing problem and its plan.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
