//! Specifies logic to read rebalancing request from json input.

use super::*;
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::{deserialize_problem, serialize_problem};

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

pub(crate) type ApiProblem = Problem;
pub(crate) type CoreProblem = rebalance_core::models::Problem;

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        deserialize_problem(self)?.read_pragmatic()
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticProblem for ApiProblem {
    fn read_pragmatic(self) -> Result<CoreProblem, MultiFormatError> {
        reader::map_to_problem(self)
    }
}
