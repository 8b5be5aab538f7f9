//! Entry types shared by the description parser, the override parser and
//! the resolver.

use crate::error::SourceLocation;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Names end up as `CONFIG_<NAME>` in makefiles and C headers, so they are
/// restricted to ASCII letters, digits and underscores.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid config name regex"));

/// Check whether a token is a valid entry name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// The declared value of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    /// Parse `yes`/`no`, ignoring case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    /// Lowercase form, as written in description files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A textual reference to another entry.
///
/// `negated` dependencies must be disabled for the owner to be enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub negated: bool,
}

impl Dependency {
    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        Self {
            name: name.into(),
            negated,
        }
    }

    /// Parse a dependency token: `NAME` or `!NAME`.
    ///
    /// The `!` applies to this token only.
    pub fn parse(token: &str) -> Option<Self> {
        let (name, negated) = match token.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if !is_valid_name(name) {
            return None;
        }

        Some(Self::new(name, negated))
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// An entry as declared, before its dependencies are linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub default: Toggle,
    /// Dependencies in declaration order, without duplicates.
    pub deps: Vec<Dependency>,
    /// Where the entry was declared.
    pub origin: SourceLocation,
}

impl RawEntry {
    pub fn new(
        name: impl Into<String>,
        default: Toggle,
        deps: Vec<Dependency>,
        origin: SourceLocation,
    ) -> Self {
        Self {
            name: name.into(),
            default,
            deps,
            origin,
        }
    }

    /// Names that must be enabled.
    pub fn positive_deps(&self) -> impl Iterator<Item = &str> {
        self.deps
            .iter()
            .filter(|d| !d.negated)
            .map(|d| d.name.as_str())
    }

    /// Names that must be disabled.
    pub fn negative_deps(&self) -> impl Iterator<Item = &str> {
        self.deps
            .iter()
            .filter(|d| d.negated)
            .map(|d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("FOO"));
        assert!(is_valid_name("foo_bar_2"));
        assert!(is_valid_name("_HIDDEN"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("FOO-BAR"));
        assert!(!is_valid_name("FOO.BAR"));
        assert!(!is_valid_name("!FOO"));
    }

    #[test]
    fn test_non_ascii_names_are_rejected() {
        assert!(!is_valid_name("FÖÖ"));
        assert!(!is_valid_name("ЯДРО"));
        assert_eq!(Dependency::parse("!ÜBER"), None);
    }

    #[test]
    fn test_toggle_from_str_ignores_case() {
        assert_eq!(Toggle::from_str("yes"), Some(Toggle::Yes));
        assert_eq!(Toggle::from_str("YES"), Some(Toggle::Yes));
        assert_eq!(Toggle::from_str("No"), Some(Toggle::No));
        assert_eq!(Toggle::from_str("y"), None);
        assert_eq!(Toggle::from_str("true"), None);
        assert_eq!(Toggle::from_str(""), None);
    }

    #[test]
    fn test_toggle_display_is_lowercase() {
        assert_eq!(Toggle::Yes.to_string(), "yes");
        assert_eq!(Toggle::No.to_string(), "no");
    }

    #[test]
    fn test_dependency_parse() {
        assert_eq!(Dependency::parse("FOO"), Some(Dependency::new("FOO", false)));
        assert_eq!(Dependency::parse("!FOO"), Some(Dependency::new("FOO", true)));
        assert_eq!(Dependency::parse("!"), None);
        assert_eq!(Dependency::parse("!!FOO"), None);
        assert_eq!(Dependency::parse("FOO!"), None);
    }

    #[test]
    fn test_dependency_display_round_trips_token() {
        assert_eq!(Dependency::new("BAR", true).to_string(), "!BAR");
        assert_eq!(Dependency::new("BAR", false).to_string(), "BAR");
    }

    #[test]
    fn test_positive_and_negative_deps() {
        let entry = RawEntry::new(
            "FOO",
            Toggle::Yes,
            vec![
                Dependency::new("A", false),
                Dependency::new("B", true),
                Dependency::new("C", false),
            ],
            SourceLocation::new("Kconfig", 1),
        );

        assert_eq!(entry.positive_deps().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(entry.negative_deps().collect::<Vec<_>>(), vec!["B"]);
    }
}
