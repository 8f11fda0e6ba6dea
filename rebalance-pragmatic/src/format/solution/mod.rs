//! Specifies logic to create a "pragmatic" plan and write it into json format.

use super::*;

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::{PragmaticSolution, create_plan};
