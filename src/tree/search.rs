//! Name-based search over a whole subtree

use crate::error::TreeError;
use crate::tree::namespace::Namespace;
use crate::types::NodeId;

impl Namespace {
    /// Collect every node below `start` whose name equals `name`
    ///
    /// Depth-first with an explicit stack, so deep chains are fine; `start` itself is never a candidate. Sibling
    /// order follows the child map and is unspecified.
    pub fn find_by_name(&self, start: NodeId, name: &str) -> Result<Vec<NodeId>, TreeError> {
        let mut found = Vec::new();
        let mut pending = vec![start];
        while let Some(dir) = pending.pop() {
            let Some(children) = self.node(dir)?.children() else {
                continue;
            };
            for &child in children.values() {
                let node = self.node(child)?;
                if node.name() == name {
                    found.push(child);
                }
                if node.is_directory() {
                    pending.push(child);
                }
            }
        }
        Ok(found)
    }

    /// Full paths of every match for `name`, sorted byte-wise ascending
    pub fn find_paths(&self, start: NodeId, name: &str) -> Result<Vec<String>, TreeError> {
        let mut paths = self
            .find_by_name(start, name)?
            .into_iter()
            .map(|id| self.get_path(id))
            .collect::<Result<Vec<_>, _>>()?;
        paths.sort_unstable();
        Ok(paths)
    }
}
