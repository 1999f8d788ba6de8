//! MergeService: orchestrates sources, applies merge policy, deserializes to SimpleFsConfig.

use crate::config::paths;
use crate::config::sources::{environment, file};
use crate::config::SimpleFsConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<SimpleFsConfig, ConfigError> {
        let global = paths::global_config_path();
        Self::load_from_sources(global.as_deref(), explicit, environment::ENV_PREFIX)
    }

    /// Load config from the given sources.
    pub fn load_from_sources(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
    ) -> Result<SimpleFsConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = file::add_global(builder, global)?;
        let builder = match explicit {
            Some(path) => file::add_explicit(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder, env_prefix)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
