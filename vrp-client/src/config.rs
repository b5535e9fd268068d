//! Solver configuration passed to the engine.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use vrp_model::utils::GenericError;

/// Default max running time of the solver in seconds.
pub const DEFAULT_MAX_TIME: usize = 10;

/// Default max amount of generations (search iterations).
pub const DEFAULT_MAX_GENERATION: usize = 1000;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Specifies algorithm termination configuration.
    pub termination: TerminationConfig,
}

/// An algorithm termination configuration: solver stops when any of the limits is reached.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max running time in seconds.
    pub max_time: usize,
    /// Max amount of generations.
    pub max_generation: usize,
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self { max_time: DEFAULT_MAX_TIME, max_generation: DEFAULT_MAX_GENERATION }
    }
}

impl Config {
    /// Creates a new config with given termination limits.
    pub fn new(max_time: usize, max_generation: usize) -> Self {
        Self { termination: TerminationConfig { max_time, max_generation } }
    }

    /// Reads config from json string, missing properties get default values.
    pub fn from_json_str(json: &str) -> Result<Self, GenericError> {
        serde_json::from_str(json).map_err(|err| format!("cannot read config: '{err}'").into())
    }

    /// Serializes config into json string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
