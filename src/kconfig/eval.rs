//! Evaluation of the effective value of each entry.
//!
//! An entry is enabled when its default is `yes`, every required entry is
//! enabled and every conflicting entry is disabled. Required entries are
//! checked before conflicting ones, each list in declaration order, and
//! checking stops at the first unmet condition.
//!
//! The evaluator keeps the current path of entries being evaluated. Reaching
//! an entry that is already on the path is a circular dependency. Finished
//! values are cached per evaluator; since the order in which dependencies
//! are visited is deterministic, the cache never hides a cycle that an
//! uncached evaluation would report.

use super::graph::{ConfigGraph, NodeId};
use crate::error::{ConfgenError, Result};

/// Effective value of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub name: String,
    pub enabled: bool,
}

/// Effective values of every entry, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    entries: Vec<ResolvedEntry>,
}

impl ResolvedConfig {
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    /// Names of enabled entries, sorted.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.name.as_str())
    }

    /// `None` if no entry has this name.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| self.entries[i].enabled)
    }
}

/// One entry on the evaluation path and the next condition to check.
#[derive(Debug, Clone, Copy)]
struct Frame {
    id: NodeId,
    next: usize,
}

enum Step {
    Done(bool),
    Descend(NodeId),
}

/// Computes `enabled(entry)` over a frozen graph.
///
/// The traversal keeps its own stack of frames, so the depth of a
/// dependency chain is bounded by memory, not by the thread stack.
pub struct Evaluator<'g> {
    graph: &'g ConfigGraph,
    cache: Vec<Option<bool>>,
    path: Vec<Frame>,
    on_path: Vec<bool>,
}

impl<'g> Evaluator<'g> {
    pub fn new(graph: &'g ConfigGraph) -> Self {
        Self {
            graph,
            cache: vec![None; graph.len()],
            path: Vec::new(),
            on_path: vec![false; graph.len()],
        }
    }

    /// Effective value of the entry `id`, or `None` if the graph has no
    /// such node.
    pub fn enabled(&mut self, id: NodeId) -> Option<Result<bool>> {
        (id < self.graph.len()).then(|| self.visit(id))
    }

    /// Effective value of the entry called `name`, or `None` if there is no
    /// such entry.
    pub fn enabled_by_name(&mut self, name: &str) -> Option<Result<bool>> {
        self.graph.id(name).map(|id| self.visit(id))
    }

    /// Evaluate every entry in name order; the first failure aborts.
    pub fn evaluate_all(&mut self) -> Result<ResolvedConfig> {
        let graph = self.graph;
        let mut entries = Vec::with_capacity(graph.len());

        for (id, node) in graph.nodes() {
            entries.push(ResolvedEntry {
                name: node.name.clone(),
                enabled: self.visit(id)?,
            });
        }

        Ok(ResolvedConfig { entries })
    }

    fn visit(&mut self, root: NodeId) -> Result<bool> {
        if let Some(value) = self.cache[root] {
            return Ok(value);
        }

        let graph = self.graph;
        let mut value = false;
        self.enter(root);

        while let Some(frame) = self.path.last_mut() {
            let node = graph.linked(frame.id);

            let step = if !node.default.is_yes() {
                Step::Done(false)
            } else {
                match node.condition(frame.next) {
                    None => Step::Done(true),
                    Some((dep, wanted)) => match self.cache[dep] {
                        Some(actual) if actual == wanted => {
                            frame.next += 1;
                            continue;
                        }
                        Some(_) => Step::Done(false),
                        None => Step::Descend(dep),
                    },
                }
            };

            match step {
                Step::Done(result) => {
                    let id = frame.id;
                    self.path.pop();
                    self.on_path[id] = false;
                    self.cache[id] = Some(result);
                    value = result;
                }
                Step::Descend(dep) if self.on_path[dep] => {
                    let err = self.cycle_at(dep);
                    self.unwind();
                    return Err(err);
                }
                Step::Descend(dep) => self.enter(dep),
            }
        }

        Ok(value)
    }

    fn enter(&mut self, id: NodeId) {
        self.path.push(Frame { id, next: 0 });
        self.on_path[id] = true;
    }

    /// Abandon the current path after an error. Nothing on it is cached.
    fn unwind(&mut self) {
        for frame in self.path.drain(..) {
            self.on_path[frame.id] = false;
        }
    }

    /// Build the error for re-entering `id`: the path from its first
    /// occurrence, closed by `id` again.
    fn cycle_at(&self, id: NodeId) -> ConfgenError {
        let start = self.path.iter().position(|f| f.id == id).unwrap_or(0);
        let chain = self.path[start..]
            .iter()
            .map(|f| f.id)
            .chain(std::iter::once(id))
            .map(|p| self.graph.linked(p).name.clone())
            .collect();

        ConfgenError::CircularDependency { chain }
    }
}
