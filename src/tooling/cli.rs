//! CLI Tooling
//!
//! Command-line entry for the namespace interpreter: loads configuration,
//! applies flag overrides, and runs a command session over stdin or a file.

use crate::config::{ConfigLoader, SimpleFsConfig};
use crate::error::ApiError;
use crate::protocol::{Interpreter, SessionStats};
use crate::tree::Namespace;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

/// SimpleFS - in-memory hierarchical namespace driven by line commands
#[derive(Parser, Debug)]
#[command(name = "simplefs")]
#[command(about = "In-memory hierarchical namespace driven by a line-oriented command protocol")]
pub struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum children per directory
    #[arg(long)]
    pub max_nodes: Option<usize>,

    /// Maximum name length in bytes
    #[arg(long)]
    pub max_name_length: Option<usize>,

    /// Maximum node depth (root is depth 1)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold flag overrides into a loaded configuration
    pub fn apply_overrides(&self, config: &mut SimpleFsConfig) {
        if let Some(max_nodes) = self.max_nodes {
            config.limits.max_nodes = max_nodes;
        }
        if let Some(max_name_length) = self.max_name_length {
            config.limits.max_name_length = max_name_length;
        }
        if let Some(max_depth) = self.max_depth {
            config.limits.max_depth = max_depth;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}

/// CLI context holding the resolved configuration for one run
pub struct CliContext {
    config: SimpleFsConfig,
    input: Option<PathBuf>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        cli.apply_overrides(&mut config);
        Self::with_config(config, cli.input.clone())
    }

    /// Create a context from an already-built configuration
    pub fn with_config(config: SimpleFsConfig, input: Option<PathBuf>) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config, input })
    }

    pub fn config(&self) -> &SimpleFsConfig {
        &self.config
    }

    /// Run a session, reading from the configured input and replying on `output`
    pub fn execute<W: Write>(&self, output: &mut W) -> Result<SessionStats, ApiError> {
        match &self.input {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to open input file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                self.execute_with(BufReader::new(file), output)
            }
            None => self.execute_with(std::io::stdin().lock(), output),
        }
    }

    /// Run a session over an arbitrary reader
    pub fn execute_with<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<SessionStats, ApiError> {
        let limits = self.config.limits.to_limits();
        info!(
            max_nodes = limits.max_nodes,
            max_name_length = limits.max_name_length,
            max_depth = limits.max_depth,
            "Starting namespace"
        );
        let mut interpreter = Interpreter::new(Namespace::with_limits(limits));
        interpreter.run(input, output)
    }
}
