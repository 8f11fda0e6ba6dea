#[cfg(test)]
#[path = "../../../rebalance-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

mod problem;
pub use self::problem::*;

pub use self::solver::*;
