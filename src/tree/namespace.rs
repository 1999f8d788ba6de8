//! Namespace arena and structural operations
//!
//! All nodes are owned by a single arena and addressed through [`NodeId`]
//! handles. A directory owns its children through its name map; the parent
//! link on each node is a plain handle and never keeps a node alive.
//!
//! Every operation validates before it mutates, so a returned error means the
//! tree is exactly as it was.

use crate::error::{Limit, TreeError};
use crate::tree::limits::Limits;
use crate::tree::node::{Node, NodeKind, NodeType};
use crate::types::NodeId;
use tracing::debug;

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// In-memory hierarchical namespace
#[derive(Debug)]
pub struct Namespace {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    live: usize,
    limits: Limits,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace holding only an empty root directory
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Namespace {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node::root()),
            }],
            free: Vec::new(),
            root: NodeId::new(0, 0),
            live: 1,
            limits,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of live nodes, root included
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when only the root exists
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 1
    }

    /// Get a live node by handle
    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
            .ok_or_else(|| TreeError::NotFound(format!("stale node handle {}", id)))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, TreeError> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or_else(|| TreeError::NotFound(format!("stale node handle {}", id)))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId::new(index, 0)
    }

    fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index())?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(node)
    }

    /// Look up `name` among the direct children of `dir`
    pub fn find_in_dir(&self, dir: NodeId, name: &str) -> Result<Option<NodeId>, TreeError> {
        let node = self.node(dir)?;
        let children = node.children().ok_or_else(|| {
            TreeError::WrongKind(format!("'{}' is not a directory", node.name()))
        })?;
        Ok(children.get(name).copied())
    }

    /// Create an empty file or directory named `name` under `parent`
    pub fn create(
        &mut self,
        parent: NodeId,
        name: &str,
        node_type: NodeType,
    ) -> Result<NodeId, TreeError> {
        let parent_node = self.node(parent)?;
        let children = parent_node.children().ok_or_else(|| {
            TreeError::WrongKind(format!("'{}' is not a directory", parent_node.name()))
        })?;

        if name.is_empty() || name.contains('/') {
            return Err(TreeError::InvalidName(name.to_string()));
        }
        if children.contains_key(name) {
            return Err(TreeError::AlreadyExists(name.to_string()));
        }
        if children.len() >= self.limits.max_nodes {
            return Err(TreeError::CapacityExceeded {
                limit: Limit::Children,
                detail: format!("directory already holds {} entries", children.len()),
            });
        }
        if name.len() > self.limits.max_name_length {
            return Err(TreeError::CapacityExceeded {
                limit: Limit::NameLength,
                detail: format!("{} > {}", name.len(), self.limits.max_name_length),
            });
        }
        if parent_node.depth() >= self.limits.max_depth {
            return Err(TreeError::CapacityExceeded {
                limit: Limit::Depth,
                detail: format!("parent depth {}", parent_node.depth()),
            });
        }

        let depth = parent_node.depth() + 1;
        let id = self.allocate(Node {
            name: name.to_string(),
            depth,
            parent: Some(parent),
            kind: NodeKind::empty(node_type),
        });
        if let Some(children) = self.node_mut(parent)?.children_mut() {
            children.insert(name.to_string(), id);
        }

        debug!(name, depth, ?node_type, "Created node");
        Ok(id)
    }

    /// Delete a file, or a directory with no children
    ///
    /// Never touches grandchildren.
    pub fn delete(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.node(id)?;
        let parent = node.parent().ok_or(TreeError::RootImmutable)?;
        if let Some(children) = node.children() {
            if !children.is_empty() {
                return Err(TreeError::NotEmpty(format!(
                    "'{}' has {} entries",
                    node.name(),
                    children.len()
                )));
            }
        }

        let name = node.name().to_string();
        let node_type = node.node_type();
        if let Some(children) = self.node_mut(parent)?.children_mut() {
            children.remove(&name);
        }
        self.release(id);

        debug!(name = %name, ?node_type, "Deleted node");
        Ok(())
    }

    /// Delete a node and everything below it, returning how many nodes went away
    pub fn delete_recursive(&mut self, id: NodeId) -> Result<usize, TreeError> {
        if self.node(id)?.parent().is_none() {
            return Err(TreeError::RootImmutable);
        }
        let removed = self.remove_subtree(id)?;
        debug!(removed, "Deleted subtree");
        Ok(removed)
    }

    fn remove_subtree(&mut self, id: NodeId) -> Result<usize, TreeError> {
        let mut removed = 0;
        let mut pending = vec![id];
        // Removing a child reshapes the map, so pick a fresh one every round.
        while let Some(&dir) = pending.last() {
            match self.any_child(dir)? {
                Some(child) => pending.push(child),
                None => {
                    pending.pop();
                    self.delete(dir)?;
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    fn any_child(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self
            .node(id)?
            .children()
            .and_then(|children| children.values().next().copied()))
    }

    /// Content of a file
    pub fn file_content(&self, id: NodeId) -> Result<&[u8], TreeError> {
        let node = self.node(id)?;
        node.content()
            .ok_or_else(|| TreeError::WrongKind(format!("'{}' is not a file", node.name())))
    }

    /// Replace the whole content of a file with a copy of `content`
    pub fn set_file_content(&mut self, id: NodeId, content: &[u8]) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        match &mut node.kind {
            NodeKind::File { content: current } => {
                *current = content.to_vec();
                debug!(name = %node.name, bytes = content.len(), "Replaced file content");
                Ok(())
            }
            NodeKind::Directory { .. } => Err(TreeError::WrongKind(format!(
                "'{}' is not a file",
                node.name
            ))),
        }
    }

    /// Number of nodes in the subtree rooted at `id`, `id` included
    pub fn subtree_size(&self, id: NodeId) -> Result<usize, TreeError> {
        let mut total = 0;
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            total += 1;
            if let Some(children) = self.node(next)?.children() {
                pending.extend(children.values().copied());
            }
        }
        Ok(total)
    }
}
