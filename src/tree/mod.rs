//! Namespace tree
//!
//! The tree data structure and its operations: creation, leaf and recursive
//! deletion, path resolution, file content access, and name search.

pub mod limits;
pub mod namespace;
pub mod node;
pub mod path;
pub mod search;

pub use limits::{Limits, MAX_DEPTH, MAX_NAMELENGTH, MAX_NODES};
pub use namespace::Namespace;
pub use node::{Node, NodeKind, NodeType};
pub use path::{segments, Resolution};
