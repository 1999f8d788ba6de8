//! SimpleFS: In-Memory Hierarchical Namespace
//!
//! A tree of directories and files kept entirely in memory, driven by a
//! line-oriented command protocol (`create`, `create_dir`, `read`, `write`,
//! `delete`, `delete_r`, `find`, `exit`).

pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod tooling;
pub mod tree;
pub mod types;
