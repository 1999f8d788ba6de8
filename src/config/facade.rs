//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::SimpleFsConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<SimpleFsConfig, ApiError> {
        Self::finish(MergeService::load(None)?)
    }

    /// Load configuration with a specific file layered over the global one.
    pub fn load_from_file(path: &Path) -> Result<SimpleFsConfig, ApiError> {
        Self::finish(MergeService::load(Some(path))?)
    }

    fn finish(config: SimpleFsConfig) -> Result<SimpleFsConfig, ApiError> {
        config.validate()?;
        Ok(config)
    }
}
