//! Generator settings for confgen.
//!
//! Settings come from an optional YAML file passed with `--settings`. They
//! control how the generated files are named and formatted. Unknown fields
//! are ignored and every field has a default, so an empty file is valid.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Settings;
