//! Exit code constants for the confgen CLI.
//!
//! - 0: Success
//! - 1: Usage or user error (bad args, bad settings, unreadable files)
//! - 2: Parse failure in a description or override file
//! - 3: Dependency failure (unknown or circular dependency)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: wrong argument count, invalid settings, or I/O failure.
pub const USER_ERROR: i32 = 1;

/// Parse failure: malformed line, bad name or default, include cycle.
pub const PARSE_FAILURE: i32 = 2;

/// Dependency failure: unknown dependency name or circular dependency.
pub const DEPENDENCY_FAILURE: i32 = 3;
