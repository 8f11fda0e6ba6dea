#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// Specifies a reason why rebalancing pipeline has stopped.
///
/// Every variant stops the pipeline immediately: no partial plan is ever returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RebalanceError {
    /// Input is rejected before any computation: empty roster, duplicated station ids, negative
    /// vehicle counts.
    InvalidInput(String),
    /// Total fleet size differs between current and target distributions.
    ConservationViolation(String),
    /// Min-cost flow cannot route all surplus vehicles to deficit stations.
    SolverInfeasible(String),
    /// Solver has exhausted its iteration or time quota.
    SolverTimeout(String),
}

/// A type alias for result type with `RebalanceError`.
pub type RebalanceResult<T> = Result<T, RebalanceError>;

impl RebalanceError {
    /// Returns a short name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::ConservationViolation(_) => "ConservationViolation",
            Self::SolverInfeasible(_) => "SolverInfeasible",
            Self::SolverTimeout(_) => "SolverTimeout",
        }
    }

    /// Returns error details.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg)
            | Self::ConservationViolation(msg)
            | Self::SolverInfeasible(msg)
            | Self::SolverTimeout(msg) => msg.as_str(),
        }
    }
}

impl fmt::Display for RebalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for RebalanceError {}

/// An error for I/O and format plumbing, a plain message.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericError(String);

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}
