//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use rebalance_core::prelude::{Environment, GenericError, InfoLogger, Quota, TimeQuota};
use rebalance_core::utils::DEFAULT_MAX_ITERATIONS;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A solver configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies solver termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// A termination configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max time of min-cost flow search in seconds. Default is no limit.
    pub max_time: Option<usize>,
    /// Max amount of augmenting iterations. Default is 1000000.
    pub max_iterations: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Prefix of logging messages.
    pub prefix: Option<String>,
}

/// An environment specific configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Specifies whether nearest station search can use multiple threads. Default is true.
    pub parallelism: Option<bool>,
}

impl Config {
    /// Overrides config values with the ones specified explicitly, e.g. via command line.
    pub fn with_overrides(mut self, max_time: Option<usize>, max_iterations: Option<usize>, is_logging: bool) -> Self {
        if max_time.is_some() || max_iterations.is_some() {
            let termination = self.termination.get_or_insert_with(TerminationConfig::default);
            termination.max_time = max_time.or(termination.max_time);
            termination.max_iterations = max_iterations.or(termination.max_iterations);
        }

        if is_logging {
            let telemetry = self.telemetry.get_or_insert_with(TelemetryConfig::default);
            telemetry.logging.get_or_insert_with(LoggingConfig::default).enabled = true;
        }

        self
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates an environment from config.
pub fn create_environment_from_config(config: &Config) -> Result<Environment, GenericError> {
    let termination = config.termination.clone().unwrap_or_default();

    let max_iterations = termination.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
    if max_iterations == 0 {
        return Err("maxIterations should be greater than zero".into());
    }

    let quota = termination.max_time.map::<Arc<dyn Quota>, _>(|time| Arc::new(TimeQuota::new(time as f64)));
    let is_parallel = config.environment.as_ref().and_then(|environment| environment.parallelism).unwrap_or(true);

    Ok(Environment::new(quota, max_iterations, is_parallel, create_logger(config.telemetry.as_ref())))
}

fn create_logger(telemetry: Option<&TelemetryConfig>) -> InfoLogger {
    match telemetry.and_then(|telemetry| telemetry.logging.as_ref()) {
        Some(LoggingConfig { enabled: true, prefix }) => {
            let prefix = prefix.clone().unwrap_or_default();
            Arc::new(move |msg: &str| eprintln!("{prefix}{msg}"))
        }
        _ => Arc::new(|_: &str| {}),
    }
}
