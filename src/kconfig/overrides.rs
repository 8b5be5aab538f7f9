//! Override files: `NAME VALUE` pairs replacing declared defaults.
//!
//! ```text
//! # Config     Override value
//! SOME_THING   yes
//! ```

use super::line::parse_override_line;
use super::types::Toggle;
use crate::error::{ConfgenError, Result, SourceLocation};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Parsed overrides. A name listed twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: BTreeMap<String, Toggle>,
}

impl Overrides {
    /// Load overrides from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfgenError::Io(format!(
                "failed to read override file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(file = %path.display(), "parsing overrides");
        Self::parse(&content, path)
    }

    /// Parse override lines. `path` is used for diagnostics only.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut values = BTreeMap::new();

        for (idx, line) in content.lines().enumerate() {
            let location = SourceLocation::new(path, idx + 1);
            if let Some((name, value)) = parse_override_line(line, &location)? {
                values.insert(name, value);
            }
        }

        Ok(Self { values })
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Toggle)>) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Toggle> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Toggle)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
