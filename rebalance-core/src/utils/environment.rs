#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::Quota;
use std::sync::Arc;

/// A logger type which is called with various information about the pipeline run.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Default maximum amount of augmenting iterations of min-cost flow solver.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Keeps track of environment specific information which influences algorithm behavior.
///
/// Nothing here is shared between calls implicitly: every `Solver` gets its environment injected.
#[derive(Clone)]
pub struct Environment {
    /// An optional computational quota, for example, a time limit.
    pub quota: Option<Arc<dyn Quota>>,

    /// Maximum amount of augmenting iterations of min-cost flow solver.
    pub max_iterations: usize,

    /// Specifies whether nearest station search can run on multiple threads.
    pub is_parallel: bool,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(quota: Option<Arc<dyn Quota>>, max_iterations: usize, is_parallel: bool, logger: InfoLogger) -> Self {
        Self { quota, max_iterations, is_parallel, logger }
    }

}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(None, DEFAULT_MAX_ITERATIONS, true, Arc::new(|msg| eprintln!("{msg}")))
    }
}
