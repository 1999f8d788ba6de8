//! Namespace node types

use crate::types::NodeId;
use std::collections::HashMap;

/// Kind tag without payload, used when requesting creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    File,
    Directory,
}

/// Kind-specific payload of a node
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Children keyed by name; iteration order is unspecified
    Directory { children: HashMap<String, NodeId> },
    File { content: Vec<u8> },
}

impl NodeKind {
    pub(crate) fn empty(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Directory => NodeKind::Directory {
                children: HashMap::new(),
            },
            NodeType::File => NodeKind::File {
                content: Vec::new(),
            },
        }
    }
}

/// A directory or file in the namespace
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            name: String::new(),
            depth: 1,
            parent: None,
            kind: NodeKind::empty(NodeType::Directory),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based distance from the root
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn node_type(&self) -> NodeType {
        match self.kind {
            NodeKind::Directory { .. } => NodeType::Directory,
            NodeKind::File { .. } => NodeType::File,
        }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Children of a directory, `None` for files
    pub fn children(&self) -> Option<&HashMap<String, NodeId>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut HashMap<String, NodeId>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Content of a file, `None` for directories
    pub fn content(&self) -> Option<&[u8]> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }
}
