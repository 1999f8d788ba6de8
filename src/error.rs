//! Error types for tree operations, the command protocol, and tooling.

use std::fmt;
use thiserror::Error;

/// Which namespace limit a rejected operation ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Directory already holds `max_nodes` children
    Children,
    /// Name longer than `max_name_length` bytes
    NameLength,
    /// Parent already sits at `max_depth`
    Depth,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Limit::Children => "children",
            Limit::NameLength => "name length",
            Limit::Depth => "depth",
        };
        f.write_str(name)
    }
}

/// Failures reported by the tree operations engine
///
/// None of these leave the tree partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Capacity exceeded ({limit}): {detail}")]
    CapacityExceeded { limit: Limit, detail: String },

    #[error("Wrong node kind: {0}")]
    WrongKind(String),

    #[error("Directory not empty: {0}")]
    NotEmpty(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("The root directory cannot be removed")]
    RootImmutable,
}

impl TreeError {
    /// Short stable label, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            TreeError::NotFound(_) => "not_found",
            TreeError::AlreadyExists(_) => "already_exists",
            TreeError::CapacityExceeded { .. } => "capacity_exceeded",
            TreeError::WrongKind(_) => "wrong_kind",
            TreeError::NotEmpty(_) => "not_empty",
            TreeError::InvalidName(_) => "invalid_name",
            TreeError::RootImmutable => "root_immutable",
        }
    }
}

/// Malformed command lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Command '{0}' is missing its argument")]
    MissingArgument(&'static str),

    #[error("write requires non-empty content")]
    MissingContent,
}

/// Errors surfaced by the tooling layer (config, logging, I/O)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
