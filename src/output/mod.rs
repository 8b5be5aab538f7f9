//! Rendering and writing of the generated files.
//!
//! Both fragments list only enabled entries, once each, in name order.

use crate::error::Result;
use crate::fs::{StagedFile, commit_all, stage};
use crate::kconfig::{ConfigTable, ResolvedConfig};
use crate::settings::Settings;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rendered contents of both generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub makefile: String,
    pub header: String,
}

impl GeneratedFiles {
    pub fn render(resolved: &ResolvedConfig, settings: &Settings) -> Self {
        Self {
            makefile: render_makefile(resolved, settings),
            header: render_header(resolved, settings),
        }
    }

    /// Write both files into `out_dir` and return their paths.
    ///
    /// Both contents are staged to synced temporary files before either
    /// target is replaced. If a replacement fails, targets already replaced
    /// get their previous content back, so the pair never mixes outputs of
    /// different runs.
    pub fn write(&self, out_dir: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
        let targets = [
            (out_dir.join(&settings.makefile_name), &self.makefile),
            (out_dir.join(&settings.header_name), &self.header),
        ];

        let mut staged = Vec::with_capacity(targets.len());
        for (path, content) in &targets {
            match stage(path, content.as_bytes()) {
                Ok(file) => staged.push(file),
                Err(err) => {
                    staged.into_iter().for_each(StagedFile::discard);
                    return Err(err);
                }
            }
        }

        let written = commit_all(staged)?;
        for (path, content) in &targets {
            debug!(file = %path.display(), bytes = content.len(), "wrote generated file");
        }

        Ok(written)
    }
}

/// Makefile fragment: `CONFIG_NAME = y` per enabled entry.
pub fn render_makefile(resolved: &ResolvedConfig, settings: &Settings) -> String {
    let mut out = format!("# AUTOGENERATED from {}. DO NOT EDIT!\n\n", settings.generator);

    for name in resolved.enabled() {
        let _ = writeln!(
            out,
            "{}{:<width$} = y",
            settings.symbol_prefix,
            name,
            width = settings.name_width
        );
    }

    out
}

/// C header fragment: `#define CONFIG_NAME y` per enabled entry, inside an
/// include guard.
pub fn render_header(resolved: &ResolvedConfig, settings: &Settings) -> String {
    let mut out = format!("/* AUTOGENERATED from {}. DO NOT EDIT! */\n\n", settings.generator);
    let _ = writeln!(out, "#ifndef {}", settings.header_guard);
    let _ = writeln!(out, "#define {}\n", settings.header_guard);

    for name in resolved.enabled() {
        let _ = writeln!(
            out,
            "#define {}{:<width$} y",
            settings.symbol_prefix,
            name,
            width = settings.name_width
        );
    }

    out.push_str("\n#endif\n");
    out
}

/// Human-readable listing of every declared entry, enabled or not:
/// `CONFIG_NAME=yes | DEP !NEG`, required names before negated ones.
pub fn render_dump(table: &ConfigTable, settings: &Settings) -> String {
    let mut out = String::new();

    for entry in table.iter() {
        let decl = format!("{}={}", settings.symbol(&entry.name), entry.default);
        if entry.deps.is_empty() {
            let _ = writeln!(out, "{}", decl);
            continue;
        }

        let deps: Vec<String> = entry
            .positive_deps()
            .map(str::to_string)
            .chain(entry.negative_deps().map(|name| format!("!{}", name)))
            .collect();
        let _ = writeln!(out, "{:<30} | {}", decl, deps.join(" "));
    }

    out
}
