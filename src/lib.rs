//! confgen: Kconfig-style feature flag resolver for build-time code
//! generation.
//!
//! A description file declares boolean entries with defaults and
//! dependencies. confgen applies overrides, resolves the dependency graph
//! and emits a makefile fragment and a C header listing enabled entries.

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod kconfig;
pub mod logging;
pub mod output;
pub mod settings;

#[cfg(test)]
mod test_support;
