//! Environment variable source: SIMPLEFS__ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix read in production; tests pass their own to stay isolated.
pub const ENV_PREFIX: &str = "SIMPLEFS";

/// Add environment variable overlay to builder.
/// `SIMPLEFS__LIMITS__MAX_NODES=64` sets `limits.max_nodes`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    prefix: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(prefix)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
