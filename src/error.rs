//! Error types for the confgen CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code so
//! the build that invokes confgen stops on the first failure.

use crate::exit_codes;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// File and line a diagnostic refers to. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// What was wrong with a rejected line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing default value for '{0}'")]
    MissingDefault(String),
    #[error("invalid name '{0}': names may only contain letters, digits and '_'")]
    InvalidName(String),
    #[error("default is invalid: '{0}' (must be 'yes' or 'no')")]
    InvalidDefault(String),
    #[error("invalid dependency '{0}'")]
    InvalidDependency(String),
    #[error("expected {expected} tokens, found {found}")]
    TokenCount { expected: usize, found: usize },
    #[error("include cycle: '{}' is already being parsed", .0.display())]
    IncludeCycle(PathBuf),
}

/// Main error type for confgen operations.
#[derive(Error, Debug)]
pub enum ConfgenError {
    /// A description or override line could not be parsed.
    #[error("parse error at {location}: {kind}")]
    Parse {
        location: SourceLocation,
        #[source]
        kind: ParseErrorKind,
    },

    /// An entry names a dependency that was never declared.
    #[error("{entry} has unknown dependency: {dependency}")]
    UnknownDependency { entry: String, dependency: String },

    /// Evaluation revisited an entry that is still being evaluated.
    #[error("circular dependency detected: {}", .chain.join(" -> "))]
    CircularDependency { chain: Vec<String> },

    /// Reading or writing a file failed.
    #[error("{0}")]
    Io(String),

    /// Invalid settings or arguments.
    #[error("{0}")]
    UserError(String),
}

impl ConfgenError {
    pub(crate) fn parse(location: SourceLocation, kind: ParseErrorKind) -> Self {
        ConfgenError::Parse { location, kind }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfgenError::Parse { .. } => exit_codes::PARSE_FAILURE,
            ConfgenError::UnknownDependency { .. } => exit_codes::DEPENDENCY_FAILURE,
            ConfgenError::CircularDependency { .. } => exit_codes::DEPENDENCY_FAILURE,
            ConfgenError::Io(_) => exit_codes::USER_ERROR,
            ConfgenError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for confgen operations.
pub type Result<T> = std::result::Result<T, ConfgenError>;
