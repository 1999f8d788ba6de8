//! Structural limits enforced on creation

/// Maximum number of children in one directory
pub const MAX_NODES: usize = 1024;

/// Maximum name length, in bytes
pub const MAX_NAMELENGTH: usize = 255;

/// Maximum depth of a node; the root sits at depth 1
pub const MAX_DEPTH: usize = 255;

/// Limits applied by a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_nodes: usize,
    pub max_name_length: usize,
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: MAX_NODES,
            max_name_length: MAX_NAMELENGTH,
            max_depth: MAX_DEPTH,
        }
    }
}
