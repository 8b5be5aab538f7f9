//! Description file loading with recursive includes.
//!
//! An `include PATH` line parses another file in place. `PATH` is relative
//! to the directory of the file containing the directive, so nested
//! includes chain naturally. The stack of files currently being parsed is
//! tracked by canonical path to reject include cycles.

use super::line::{Declaration, parse_declaration};
use super::table::ConfigTable;
use crate::error::{ConfgenError, ParseErrorKind, Result, SourceLocation};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parses description files into a [`ConfigTable`].
pub struct DescriptionParser<'t> {
    table: &'t mut ConfigTable,
    /// Canonical paths of the files currently open, outermost first.
    include_stack: Vec<PathBuf>,
}

impl<'t> DescriptionParser<'t> {
    pub fn new(table: &'t mut ConfigTable) -> Self {
        Self {
            table,
            include_stack: Vec::new(),
        }
    }

    /// Parse a description file and everything it includes.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.load(path.as_ref(), None)
    }

    /// Parse description text that claims to come from `path`.
    ///
    /// `path` names the file in diagnostics and anchors relative includes.
    pub fn parse_source(&mut self, content: &str, path: &Path) -> Result<()> {
        let base_dir = path.parent().unwrap_or(Path::new(""));

        for (idx, line) in content.lines().enumerate() {
            let location = SourceLocation::new(path, idx + 1);

            match parse_declaration(line, &location)? {
                None => {}
                Some(Declaration::Include(target)) => {
                    let target = base_dir.join(target);
                    self.load(&target, Some(&location))?;
                }
                Some(Declaration::Entry(entry)) => {
                    self.table.insert(entry);
                }
            }
        }

        Ok(())
    }

    fn load(&mut self, path: &Path, included_at: Option<&SourceLocation>) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| open_error(path, included_at, e))?;

        if self.include_stack.contains(&canonical) {
            let location = included_at
                .cloned()
                .unwrap_or_else(|| SourceLocation::new(path, 0));
            return Err(ConfgenError::parse(
                location,
                ParseErrorKind::IncludeCycle(path.to_path_buf()),
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| open_error(path, included_at, e))?;

        match included_at {
            Some(at) => debug!(file = %path.display(), from = %at, "including config description"),
            None => debug!(file = %path.display(), "parsing config description"),
        }

        self.include_stack.push(canonical);
        let result = self.parse_source(&content, path);
        self.include_stack.pop();
        result
    }
}

fn open_error(
    path: &Path,
    included_at: Option<&SourceLocation>,
    err: std::io::Error,
) -> ConfgenError {
    match included_at {
        Some(at) => ConfgenError::Io(format!(
            "failed to read included file '{}' (included from {}): {}",
            path.display(),
            at,
            err
        )),
        None => ConfgenError::Io(format!(
            "failed to read config description '{}': {}",
            path.display(),
            err
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::types::Toggle;
    use crate::test_support::write_file;
    use tempfile::TempDir;

    #[test]
    fn test_parse_source_collects_entries() {
        let mut table = ConfigTable::new();
        let source = "\
# Config         Default
# ------         -------
MY_CONFIG        yes
ANOTHER_CONFIG   no      MY_CONFIG
";
        DescriptionParser::new(&mut table)
            .parse_source(source, Path::new("Kconfig"))
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("MY_CONFIG").unwrap().default, Toggle::Yes);
        let another = table.get("ANOTHER_CONFIG").unwrap();
        assert_eq!(another.default, Toggle::No);
        assert_eq!(another.origin, SourceLocation::new("Kconfig", 4));
    }

    #[test]
    fn test_parse_error_stops_at_first_bad_line() {
        let mut table = ConfigTable::new();
        let err = DescriptionParser::new(&mut table)
            .parse_source("A yes\nB sometimes\nC yes\n", Path::new("Kconfig"))
            .unwrap_err();

        assert!(err.to_string().starts_with("parse error at Kconfig:2:"));
        assert!(!table.contains("C"));
    }

    #[test]
    fn test_include_is_relative_to_including_file() {
        let dir = TempDir::new().unwrap();
        let root = write_file(dir.path(), "Kconfig", "ROOT yes\ninclude sub/Kconfig\n");
        write_file(dir.path(), "sub/Kconfig", "SUB yes ROOT\ninclude deeper/Kconfig\n");
        write_file(dir.path(), "sub/deeper/Kconfig", "DEEP no\n");

        let mut table = ConfigTable::new();
        DescriptionParser::new(&mut table).parse_file(&root).unwrap();

        let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["DEEP", "ROOT", "SUB"]);
        assert_eq!(
            table.get("DEEP").unwrap().origin.file,
            dir.path().join("sub").join("deeper/Kconfig")
        );
    }

    #[test]
    fn test_included_definition_overrides_earlier_one() {
        let dir = TempDir::new().unwrap();
        let root = write_file(dir.path(), "Kconfig", "FOO yes\ninclude extra\n");
        write_file(dir.path(), "extra", "FOO no\n");

        let mut table = ConfigTable::new();
        DescriptionParser::new(&mut table).parse_file(&root).unwrap();

        assert_eq!(table.get("FOO").unwrap().default, Toggle::No);
    }

    #[test]
    fn test_same_file_included_twice_is_not_a_cycle() {
        let dir = TempDir::new().unwrap();
        let root = write_file(dir.path(), "Kconfig", "include common\ninclude common\n");
        write_file(dir.path(), "common", "COMMON yes\n");

        let mut table = ConfigTable::new();
        DescriptionParser::new(&mut table).parse_file(&root).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_include_cycle_is_rejected() {
        let dir = TempDir::new().unwrap();
        let root = write_file(dir.path(), "a", "A yes\ninclude b\n");
        write_file(dir.path(), "b", "B yes\ninclude a\n");

        let mut table = ConfigTable::new();
        let err = DescriptionParser::new(&mut table)
            .parse_file(&root)
            .unwrap_err();

        match err {
            ConfgenError::Parse { location, kind } => {
                assert_eq!(location, SourceLocation::new(dir.path().join("b"), 2));
                assert_eq!(kind, ParseErrorKind::IncludeCycle(dir.path().join("a")));
            }
            other => panic!("Expected include cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_self_include_is_rejected() {
        let dir = TempDir::new().unwrap();
        let root = write_file(dir.path(), "Kconfig", "include Kconfig\n");

        let mut table = ConfigTable::new();
        let err = DescriptionParser::new(&mut table)
            .parse_file(&root)
            .unwrap_err();
        assert!(err.to_string().contains("include cycle"));
    }

    #[test]
    fn test_missing_include_names_the_including_line() {
        let dir = TempDir::new().unwrap();
        let root = write_file(dir.path(), "Kconfig", "A yes\ninclude missing\n");

        let mut table = ConfigTable::new();
        let err = DescriptionParser::new(&mut table)
            .parse_file(&root)
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("failed to read included file"));
        assert!(msg.contains("Kconfig:2"));
    }

    #[test]
    fn test_missing_root_file() {
        let mut table = ConfigTable::new();
        let err = DescriptionParser::new(&mut table)
            .parse_file("/nonexistent/Kconfig")
            .unwrap_err();
        assert!(err.to_string().contains("failed to read config description"));
    }
}
