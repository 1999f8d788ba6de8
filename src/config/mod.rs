//! Configuration
//!
//! Layered configuration: built-in defaults, the global config file, an
//! explicit `--config` file, `SIMPLEFS__*` environment variables, and finally
//! CLI flags applied by the tooling layer.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::{Limits, MAX_DEPTH, MAX_NAMELENGTH, MAX_NODES};
use serde::{Deserialize, Serialize};

fn default_max_nodes() -> usize {
    MAX_NODES
}

fn default_max_name_length() -> usize {
    MAX_NAMELENGTH
}

fn default_max_depth() -> usize {
    MAX_DEPTH
}

/// Structural limits section (`[limits]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum children per directory
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,

    /// Maximum name length in bytes
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Maximum node depth (root is depth 1)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_nodes: default_max_nodes(),
            max_name_length: default_max_name_length(),
            max_depth: default_max_depth(),
        }
    }
}

impl LimitsConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        for (key, value) in [
            ("max_nodes", self.max_nodes),
            ("max_name_length", self.max_name_length),
            ("max_depth", self.max_depth),
        ] {
            if value == 0 {
                return Err(ApiError::ConfigError(format!(
                    "limits.{} must be greater than zero",
                    key
                )));
            }
        }
        Ok(())
    }

    pub fn to_limits(&self) -> Limits {
        Limits {
            max_nodes: self.max_nodes,
            max_name_length: self.max_name_length,
            max_depth: self.max_depth,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimpleFsConfig {
    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimpleFsConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.limits.validate()
    }
}
