//! Atomic file replacement for generated outputs.
//!
//! All writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! The rename replaces an existing target on both POSIX and Windows, and is
//! atomic when source and target share a filesystem, which holds because
//! the temporary file lives next to the target. A crash can leave a
//! `.{filename}.tmp` file behind but never a truncated output.
//!
//! Files that must change together are staged first and then committed as
//! a group with [`commit_all`].

use crate::error::{ConfgenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A synced temporary file waiting to be renamed over its target.
#[derive(Debug)]
pub struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
}

impl StagedFile {
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the temporary file over the target. On failure the temporary
    /// file is removed and the target is left as it was.
    pub fn commit(self) -> Result<PathBuf> {
        match fs::rename(&self.temp, &self.target) {
            Ok(()) => Ok(self.target),
            Err(e) => {
                let _ = fs::remove_file(&self.temp);
                Err(ConfgenError::Io(format!(
                    "failed to replace '{}': {}",
                    self.target.display(),
                    e
                )))
            }
        }
    }

    /// Drop the temporary file without touching the target.
    pub fn discard(self) {
        let _ = fs::remove_file(&self.temp);
    }
}

/// Write `content` to a synced temporary file next to `path`, creating
/// parent directories. The target itself is not touched.
pub fn stage<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<StagedFile> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ConfgenError::Io(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp = generate_temp_path(path)?;
    write_and_sync(&temp, content)?;

    Ok(StagedFile {
        temp,
        target: path.to_path_buf(),
    })
}

/// Commit staged files in order.
///
/// If one fails, the rest are discarded and the targets already committed
/// get their previous content back (or are removed if they did not exist),
/// so either every target is replaced or none is. Only a failure during
/// that restore can leave a mix, and it is logged.
pub fn commit_all(staged: Vec<StagedFile>) -> Result<Vec<PathBuf>> {
    let mut committed: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    let mut pending = staged.into_iter();

    while let Some(file) = pending.next() {
        let previous = if file.target().is_file() {
            fs::read(file.target()).ok()
        } else {
            None
        };

        match file.commit() {
            Ok(target) => committed.push((target, previous)),
            Err(err) => {
                pending.by_ref().for_each(StagedFile::discard);
                for (target, previous) in committed.into_iter().rev() {
                    restore(&target, previous);
                }
                return Err(err);
            }
        }
    }

    Ok(committed.into_iter().map(|(target, _)| target).collect())
}

fn restore(target: &Path, previous: Option<Vec<u8>>) {
    let result = match previous {
        Some(content) => atomic_write(target, &content),
        None => fs::remove_file(target).map_err(|e| {
            ConfgenError::Io(format!("failed to remove '{}': {}", target.display(), e))
        }),
    };

    if let Err(err) = result {
        warn!(file = %target.display(), error = %err, "could not roll back generated file");
    }
}

/// Atomically write bytes to a file, creating parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    stage(path, content)?.commit().map(|_| ())
}

/// `.{filename}.tmp` in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ConfgenError::Io(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ConfgenError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ConfgenError::Io(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
