//! Linking: turn textual dependency names into graph edges.

use super::table::ConfigTable;
use super::types::Toggle;
use crate::error::{ConfgenError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Index of a node in a [`ConfigGraph`].
pub type NodeId = usize;

/// A linked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub default: Toggle,
    /// Entries that must be enabled, in declaration order.
    pub requires: Vec<NodeId>,
    /// Entries that must be disabled, in declaration order.
    pub conflicts: Vec<NodeId>,
}

impl Node {
    /// The `index`-th condition to check: required entries first, then
    /// conflicting ones. Yields the entry and the value it must have.
    pub fn condition(&self, index: usize) -> Option<(NodeId, bool)> {
        match index.checked_sub(self.requires.len()) {
            None => Some((self.requires[index], true)),
            Some(i) => self.conflicts.get(i).map(|&id| (id, false)),
        }
    }
}

/// The frozen dependency graph of a configuration run.
///
/// Node ids follow the lexicographic order of entry names.
#[derive(Debug, Clone)]
pub struct ConfigGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl ConfigGraph {
    /// Link every entry of `table`.
    ///
    /// Fails with [`ConfgenError::UnknownDependency`] on the first entry (in
    /// name order) that references an undeclared name.
    pub fn resolve(table: &ConfigTable) -> Result<Self> {
        let index: HashMap<String, NodeId> = table
            .iter()
            .enumerate()
            .map(|(id, entry)| (entry.name.clone(), id))
            .collect();

        let mut nodes = Vec::with_capacity(table.len());

        for entry in table.iter() {
            let mut requires = Vec::new();
            let mut conflicts = Vec::new();

            for dep in &entry.deps {
                let id = *index.get(&dep.name).ok_or_else(|| {
                    ConfgenError::UnknownDependency {
                        entry: entry.name.clone(),
                        dependency: dep.name.clone(),
                    }
                })?;

                if dep.negated {
                    conflicts.push(id);
                } else {
                    requires.push(id);
                }
            }

            nodes.push(Node {
                name: entry.name.clone(),
                default: entry.default,
                requires,
                conflicts,
            });
        }

        debug!(entries = nodes.len(), "linked config dependencies");
        Ok(Self { nodes, index })
    }

    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// `None` if `id` is out of range for this graph.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Node for an id handed out by this graph, or taken from the edge list
    /// of one of its nodes.
    pub(super) fn linked(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id (name) order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }
}
