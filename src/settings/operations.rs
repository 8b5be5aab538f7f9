//! Settings loading, validation, and utility operations.

use super::model::Settings;
use crate::error::{ConfgenError, Result};
use crate::kconfig::types::is_valid_name;
use std::path::Path;

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Successfully loaded and validated settings
    /// * `Err(ConfgenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfgenError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml).map_err(|e| {
            ConfgenError::UserError(format!("failed to parse settings YAML: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ConfgenError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Validate settings values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `symbol_prefix` and `header_guard` must be valid identifiers
    /// - `makefile_name` and `header_name` must be plain, distinct file names
    pub fn validate(&self) -> Result<()> {
        if !is_valid_name(&self.symbol_prefix) {
            return Err(ConfgenError::UserError(format!(
                "settings validation failed: symbol_prefix '{}' is not a valid identifier",
                self.symbol_prefix
            )));
        }

        if !is_valid_name(&self.header_guard) {
            return Err(ConfgenError::UserError(format!(
                "settings validation failed: header_guard '{}' is not a valid identifier",
                self.header_guard
            )));
        }

        for (field, value) in [
            ("makefile_name", &self.makefile_name),
            ("header_name", &self.header_name),
        ] {
            if !is_plain_file_name(value) {
                return Err(ConfgenError::UserError(format!(
                    "settings validation failed: {} must be a plain file name (found '{}')",
                    field, value
                )));
            }
        }

        if self.makefile_name == self.header_name {
            return Err(ConfgenError::UserError(format!(
                "settings validation failed: makefile_name and header_name are both '{}'",
                self.header_name
            )));
        }

        Ok(())
    }

    /// `NAME` with the symbol prefix applied.
    pub fn symbol(&self, name: &str) -> String {
        format!("{}{}", self.symbol_prefix, name)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
