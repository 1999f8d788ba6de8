//! Built-in defaults every config build starts from.

use crate::tree::{MAX_DEPTH, MAX_NAMELENGTH, MAX_NODES};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("limits.max_nodes", MAX_NODES as i64)?
        .set_default("limits.max_name_length", MAX_NAMELENGTH as i64)?
        .set_default("limits.max_depth", MAX_DEPTH as i64)
}
