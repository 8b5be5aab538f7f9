use crate::kconfig::{ConfigTable, DescriptionParser};
use std::path::{Path, PathBuf};

/// Write `content` to `root/rel`, creating parent directories.
pub(crate) fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Parse in-memory description text that has no includes.
pub(crate) fn table_from(source: &str) -> ConfigTable {
    let mut table = ConfigTable::new();
    DescriptionParser::new(&mut table)
        .parse_source(source, Path::new("Kconfig"))
        .unwrap();
    table
}
