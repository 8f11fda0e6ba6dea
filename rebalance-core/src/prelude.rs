//! This module reimports a common used types.

pub use crate::models::{Cell, Move, Plan, Problem, Station, StationPlan};
pub use crate::solver::Solver;

pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::TimeQuota;
pub use crate::utils::compare_floats;
pub use crate::utils::GenericError;
pub use crate::utils::{RebalanceError, RebalanceResult};
