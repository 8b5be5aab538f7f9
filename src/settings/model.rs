//! Settings struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// Output settings for a confgen run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // =========================================================================
    // Symbol settings
    // =========================================================================
    /// Prefix prepended to every entry name (default: "CONFIG_").
    #[serde(default = "default_symbol_prefix")]
    pub symbol_prefix: String,

    /// Column width the entry name is padded to after the prefix.
    #[serde(default = "default_name_width")]
    pub name_width: usize,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// File name of the makefile fragment (default: ".config.mk").
    #[serde(default = "default_makefile_name")]
    pub makefile_name: String,

    /// File name of the C header fragment (default: ".config.h").
    #[serde(default = "default_header_name")]
    pub header_name: String,

    /// Include guard macro of the header (default: "__CONFIG_H__").
    #[serde(default = "default_header_guard")]
    pub header_guard: String,

    /// Generator name written in the AUTOGENERATED banner.
    #[serde(default = "default_generator")]
    pub generator: String,
}

// Default value functions for serde
pub(crate) fn default_symbol_prefix() -> String {
    "CONFIG_".to_string()
}
pub(crate) fn default_name_width() -> usize {
    25
}
pub(crate) fn default_makefile_name() -> String {
    ".config.mk".to_string()
}
pub(crate) fn default_header_name() -> String {
    ".config.h".to_string()
}
pub(crate) fn default_header_guard() -> String {
    "__CONFIG_H__".to_string()
}
pub(crate) fn default_generator() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbol_prefix: default_symbol_prefix(),
            name_width: default_name_width(),
            makefile_name: default_makefile_name(),
            header_name: default_header_name(),
            header_guard: default_header_guard(),
            generator: default_generator(),
        }
    }
}
