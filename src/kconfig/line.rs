//! Single-line parsing for description and override files.
//!
//! Both formats share the same lexical rules: `#` starts a comment that runs
//! to the end of the line, and the rest is split on whitespace.

use super::types::{Dependency, RawEntry, Toggle, is_valid_name};
use crate::error::{ConfgenError, ParseErrorKind, Result, SourceLocation};

/// Keyword that turns a declaration line into an include directive.
pub const INCLUDE_KEYWORD: &str = "include";

/// A meaningful line of a description file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `include PATH`, relative to the including file.
    Include(String),
    /// `NAME DEFAULT [DEP ...]`
    Entry(RawEntry),
}

/// Drop everything after the first `#` and trim surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((data, _)) => data.trim(),
        None => line.trim(),
    }
}

/// Validate a name/value pair the way declarations and overrides share.
fn verify(name: &str, value: &str, location: &SourceLocation) -> Result<Toggle> {
    if !is_valid_name(name) {
        return Err(ConfgenError::parse(
            location.clone(),
            ParseErrorKind::InvalidName(name.to_string()),
        ));
    }

    Toggle::from_str(value).ok_or_else(|| {
        ConfgenError::parse(
            location.clone(),
            ParseErrorKind::InvalidDefault(value.to_string()),
        )
    })
}

/// Parse one line of a description file.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_declaration(line: &str, location: &SourceLocation) -> Result<Option<Declaration>> {
    let data = strip_comment(line);
    if data.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = data.split_whitespace().collect();
    let name = tokens[0];

    let Some(&value) = tokens.get(1) else {
        return Err(ConfgenError::parse(
            location.clone(),
            ParseErrorKind::MissingDefault(name.to_string()),
        ));
    };

    if name == INCLUDE_KEYWORD {
        if tokens.len() != 2 {
            return Err(ConfgenError::parse(
                location.clone(),
                ParseErrorKind::TokenCount {
                    expected: 2,
                    found: tokens.len(),
                },
            ));
        }
        return Ok(Some(Declaration::Include(value.to_string())));
    }

    let default = verify(name, value, location)?;

    let mut deps: Vec<Dependency> = Vec::with_capacity(tokens.len() - 2);
    for token in &tokens[2..] {
        let dep = Dependency::parse(token).ok_or_else(|| {
            ConfgenError::parse(
                location.clone(),
                ParseErrorKind::InvalidDependency(token.to_string()),
            )
        })?;
        if !deps.contains(&dep) {
            deps.push(dep);
        }
    }

    Ok(Some(Declaration::Entry(RawEntry::new(
        name,
        default,
        deps,
        location.clone(),
    ))))
}

/// Parse one line of an override file: exactly `NAME VALUE`.
///
/// Returns `Ok(None)` for blank and comment-only lines.
pub fn parse_override_line(
    line: &str,
    location: &SourceLocation,
) -> Result<Option<(String, Toggle)>> {
    let data = strip_comment(line);
    if data.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = data.split_whitespace().collect();
    let [name, value] = tokens.as_slice() else {
        return Err(ConfgenError::parse(
            location.clone(),
            ParseErrorKind::TokenCount {
                expected: 2,
                found: tokens.len(),
            },
        ));
    };

    let value = verify(name, value, location)?;
    Ok(Some((name.to_string(), value)))
}
