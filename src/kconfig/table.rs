//! The registry of declared entries.

use super::overrides::Overrides;
use super::types::RawEntry;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// All entries of one configuration run, keyed by name.
///
/// Iteration is in lexicographic name order, which is also the order of
/// the generated outputs.
#[derive(Debug, Clone, Default)]
pub struct ConfigTable {
    entries: BTreeMap<String, RawEntry>,
}

impl ConfigTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. A later definition of the same name replaces the
    /// earlier one; the replaced entry is returned.
    pub fn insert(&mut self, entry: RawEntry) -> Option<RawEntry> {
        let previous = self.entries.insert(entry.name.clone(), entry);
        if let Some(prev) = &previous {
            let current = &self.entries[&prev.name];
            warn!(
                name = %prev.name,
                first = %prev.origin,
                redefined = %current.origin,
                "config redefined, last definition wins"
            );
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&RawEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &RawEntry> {
        self.entries.values()
    }

    /// Replace the default of every overridden entry.
    ///
    /// Overrides naming entries that do not exist are ignored. Returns the
    /// number of entries whose default was set.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> usize {
        let mut applied = 0;

        for (name, value) in overrides.iter() {
            match self.entries.get_mut(name) {
                Some(entry) => {
                    debug!(%name, from = %entry.default, to = %value, "applying override");
                    entry.default = value;
                    applied += 1;
                }
                None => debug!(%name, "ignoring override for unknown config"),
            }
        }

        applied
    }
}
