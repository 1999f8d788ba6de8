//! Tooling & Integration Layer
//!
//! Command-line front end that wires configuration, logging, and the command
//! interpreter to process I/O.

pub mod cli;

pub use cli::{Cli, CliContext};
