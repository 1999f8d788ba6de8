//! Path tokenization, resolution, and reconstruction

use crate::error::TreeError;
use crate::tree::namespace::Namespace;
use crate::types::NodeId;

/// Outcome of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every segment resolved
    Found(NodeId),
    /// All but the final segment resolved; `parent` is the enclosing directory
    Missing { parent: NodeId, name: String },
}

fn is_separator(c: char) -> bool {
    c == '/' || c.is_whitespace()
}

/// Split a path string into its non-empty segments
///
/// `/`, whitespace and line breaks all separate segments, and runs of
/// separators collapse.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(is_separator).filter(|segment| !segment.is_empty())
}

impl Namespace {
    /// Walk `path` from `start` one directory lookup at a time
    ///
    /// With `allow_missing_last`, an unresolved final segment yields
    /// [`Resolution::Missing`] instead of an error.
    pub fn resolve_path(
        &self,
        start: NodeId,
        path: &str,
        allow_missing_last: bool,
    ) -> Result<Resolution, TreeError> {
        let mut segments = segments(path).peekable();
        if segments.peek().is_none() {
            return Err(TreeError::NotFound("empty path".to_string()));
        }

        let mut current = start;
        while let Some(segment) = segments.next() {
            let node = self.node(current)?;
            let children = node.children().ok_or_else(|| {
                TreeError::NotFound(format!("'{}' is not a directory", node.name()))
            })?;
            match children.get(segment) {
                Some(&child) => current = child,
                None if allow_missing_last && segments.peek().is_none() => {
                    return Ok(Resolution::Missing {
                        parent: current,
                        name: segment.to_string(),
                    });
                }
                None => return Err(TreeError::NotFound(format!("no entry '{}'", segment))),
            }
        }
        Ok(Resolution::Found(current))
    }

    /// Resolve a path that must name an existing node
    pub fn lookup(&self, start: NodeId, path: &str) -> Result<NodeId, TreeError> {
        match self.resolve_path(start, path, false)? {
            Resolution::Found(id) => Ok(id),
            Resolution::Missing { name, .. } => Err(TreeError::NotFound(name)),
        }
    }

    /// Rebuild the absolute path of a node from its parent links
    ///
    /// The root maps to `/`.
    pub fn get_path(&self, id: NodeId) -> Result<String, TreeError> {
        let mut names = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent() {
            names.push(current.name());
            current = self.node(parent)?;
        }
        if names.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for name in names.iter().rev() {
            path.push('/');
            path.push_str(name);
        }
        Ok(path)
    }
}
