//! Filesystem utilities for confgen.
//!
//! Generated files are consumed by `make` and the C compiler, so they are
//! only ever replaced whole.

pub mod atomic;

pub use atomic::{StagedFile, atomic_write, commit_all, stage};
