//! This module contains the pipeline steps which construct a rebalancing plan:
//! risk attribution, target allocation and min-cost rebalancing.

mod attribution;
pub use self::attribution::{StationRisk, attribute_risk, find_nearest_station};

mod allocation;
pub use self::allocation::allocate_targets;

mod rebalancing;
pub use self::rebalancing::{Rebalancing, rebalance};
