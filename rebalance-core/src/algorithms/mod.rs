//! This module contains generic algorithms used by the rebalancing pipeline.

pub mod flow;
pub mod geometry;
