//! This module contains a min-cost flow algorithm implemented over an explicit arena of nodes and
//! edges. Flow is integral: capacities are integers, so successive shortest paths keep every
//! intermediate flow integral as well.

mod network;
pub use self::network::{EdgeId, FlowEdge, FlowNetwork, NodeId, UNBOUNDED_CAPACITY};

mod min_cost_flow;
pub use self::min_cost_flow::{FlowSummary, MinCostFlow};
