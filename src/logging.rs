//! Logging System
//!
//! Structured logging using the `tracing` crate. Protocol replies own stdout,
//! so diagnostics default to stderr at `warn`.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Where file logging goes
///
/// `SIMPLEFS_LOG_FILE` beats the configured path; with neither set the log
/// lands in the platform state directory. Empty values count as unset.
pub fn log_file_path(configured: Option<&Path>) -> Result<PathBuf, ApiError> {
    let from_env = std::env::var_os("SIMPLEFS_LOG_FILE")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    match from_env.or_else(|| {
        configured
            .filter(|path| !path.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }) {
        Some(path) => Ok(path),
        None => default_log_file_path(),
    }
}

fn default_log_file_path() -> Result<PathBuf, ApiError> {
    let project_dirs =
        directories::ProjectDirs::from("", "simplefs", "simplefs").ok_or_else(|| {
            ApiError::ConfigError(
                "Could not determine platform state directory for log file".to_string(),
            )
        })?;
    let state_dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir());
    Ok(state_dir.join("simplefs.log"))
}

/// `[logging]` table of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `false` installs a subscriber that drops everything
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base filter level, e.g. `warn` or `debug`; `off` silences all targets
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `text` or `json`
    #[serde(default = "default_format")]
    pub format: String,

    /// `stderr` (default), `stdout`, `both`, `file` or `file+stderr`.
    /// Sending logs to stdout interleaves them with protocol replies.
    #[serde(default = "default_output")]
    pub output: String,

    /// Target for the `file` outputs; see [`log_file_path`]
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// ANSI colors for text logs on a terminal stream
    #[serde(default = "default_true")]
    pub color: bool,

    /// Per-target levels, e.g. `"simplefs::tree" = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the global subscriber
///
/// Environment variables (SIMPLEFS_LOG, SIMPLEFS_LOG_FORMAT, SIMPLEFS_LOG_OUTPUT,
/// SIMPLEFS_LOG_MODULES) take precedence over `config`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ApiError> {
    if !config.enabled {
        return Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
            .map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)));
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let writer = build_writer(&output, config)?;
    let use_color = config.color && !output.file;

    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    let subscriber = Registry::default().with(filter);

    let result = match format {
        LogFormat::Json => subscriber.with(layer.json()).try_init(),
        LogFormat::Text => subscriber.with(layer.with_ansi(use_color)).try_init(),
    };
    result.map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn build_writer(
    output: &OutputDestinations,
    config: &LoggingConfig,
) -> Result<BoxMakeWriter, ApiError> {
    if output.file {
        let file = Arc::new(open_log_file(config)?);
        if output.stderr {
            return Ok(BoxMakeWriter::new(file.and(std::io::stderr)));
        }
        return Ok(BoxMakeWriter::new(file));
    }
    let writer = match (output.stdout, output.stderr) {
        (true, true) => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
        (true, false) => BoxMakeWriter::new(std::io::stdout),
        _ => BoxMakeWriter::new(std::io::stderr),
    };
    Ok(writer)
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, ApiError> {
    let log_file = log_file_path(config.file.as_deref())?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| {
            ApiError::ConfigError(format!("Failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env("SIMPLEFS_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, module_level) in &config.modules {
        filter = filter.add_directive(parse_directive(module, module_level)?);
    }

    if let Ok(modules_str) = std::env::var("SIMPLEFS_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            if let Some((module, level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module.trim(), level.trim())?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, ApiError> {
    format!("{}={}", module, level)
        .parse()
        .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// `SIMPLEFS_LOG_FORMAT` wins when it names a known format; a bad config value is an error
fn determine_format(config: &LoggingConfig) -> Result<LogFormat, ApiError> {
    let from_env = std::env::var("SIMPLEFS_LOG_FORMAT")
        .ok()
        .and_then(|value| LogFormat::parse(&value));
    match from_env {
        Some(format) => Ok(format),
        None => LogFormat::parse(&config.format).ok_or_else(|| {
            ApiError::ConfigError(format!(
                "Unknown log format '{}', expected text or json",
                config.format
            ))
        }),
    }
}

/// Output destinations
#[derive(Debug)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

/// Determine output destinations from config or environment
fn determine_output(config: &LoggingConfig) -> Result<OutputDestinations, ApiError> {
    if let Ok(output) = std::env::var("SIMPLEFS_LOG_OUTPUT") {
        return parse_output_destinations(&output);
    }
    parse_output_destinations(&config.output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ApiError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        "both" => (true, true, false),
        _ => {
            return Err(ApiError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}
