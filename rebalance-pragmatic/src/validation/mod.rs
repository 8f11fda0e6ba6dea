//! This module provides functionality to validate request definition for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};

mod common;
use self::common::*;

mod stations;
use self::stations::validate_stations;

/// Keeps request and provides helper methods for validation rules.
pub struct ValidationContext<'a> {
    /// A request to be validated.
    pub problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_stations(self).err().unwrap_or_default();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Get list of stations from the request.
    fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.problem.stations.iter()
    }
}
