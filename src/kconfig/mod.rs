//! Kconfig-style feature flag resolution.
//!
//! A run goes through these phases, each owning its own data:
//! - parse description files into a [`ConfigTable`] (with includes)
//! - apply [`Overrides`] to the declared defaults
//! - link the table into a [`ConfigGraph`], rejecting unknown dependencies
//! - evaluate every entry with an [`Evaluator`], rejecting cycles

mod eval;
mod graph;
mod line;
mod overrides;
mod source;
mod table;
pub mod types;


// Re-export public API
pub use eval::{Evaluator, ResolvedConfig, ResolvedEntry};
pub use graph::{ConfigGraph, Node, NodeId};
pub use line::{Declaration, INCLUDE_KEYWORD, parse_declaration, parse_override_line};
pub use overrides::Overrides;
pub use source::DescriptionParser;
pub use table::ConfigTable;
pub use types::{Dependency, RawEntry, Toggle};

use crate::error::Result;

/// Link `table` and evaluate every entry.
pub fn resolve(table: &ConfigTable) -> Result<ResolvedConfig> {
    let graph = ConfigGraph::resolve(table)?;
    Evaluator::new(&graph).evaluate_all()
}
