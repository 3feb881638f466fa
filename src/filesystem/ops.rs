// src/filesystem/ops.rs

//! Directory-level filesystem primitives
//!
//! The apply engine only ever moves whole directories (backup and restore),
//! removes whole directories, or layers one tree onto another. Each primitive
//! maps its failure onto exactly one error kind so callers can report which
//! step went wrong.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Counters describing what a merge did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Files that did not exist in the destination
    pub files_added: usize,
    /// Files that replaced a same-named destination file
    pub files_replaced: usize,
    /// Directories created in the destination
    pub dirs_created: usize,
}

impl MergeStats {
    pub fn total_files(&self) -> usize {
        self.files_added + self.files_replaced
    }
}

/// Rename a directory in one metadata operation
///
/// No copy fallback: a cross-volume rename fails instead of degrading into an
/// O(size) copy that could be interrupted halfway.
pub fn rename_dir(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| Error::RenameFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    debug!("Renamed {} -> {}", from.display(), to.display());
    Ok(())
}

/// Remove a directory tree
///
/// Returns `Ok(false)` if there was nothing to remove.
pub fn remove_dir_recursive(path: &Path) -> Result<bool> {
    if !path.exists() {
        debug!("Nothing to remove at {}", path.display());
        return Ok(false);
    }

    fs::remove_dir_all(path).map_err(|source| Error::RecursiveDeleteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Removed {}", path.display());
    Ok(true)
}

/// Recursively merge `src` into `dst`
///
/// - Files present in both trees are overwritten by the source copy
/// - Files present only in the destination are left alone
/// - The destination is never cleared first
///
/// Symlinks and other special files in the source are skipped.
pub fn merge_dir(src: &Path, dst: &Path) -> Result<MergeStats> {
    let merge_err = |reason: String| Error::MergeFailed {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        reason,
    };

    if !src.is_dir() {
        return Err(Error::NotFound(src.to_path_buf()));
    }

    let mut stats = MergeStats::default();

    if !dst.is_dir() {
        fs::create_dir_all(dst).map_err(|e| merge_err(format!("create destination: {}", e)))?;
        stats.dirs_created += 1;
    }

    for entry in WalkDir::new(src).follow_links(false).min_depth(1) {
        let entry = entry.map_err(|e| merge_err(format!("walk: {}", e)))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| merge_err(format!("relative path: {}", e)))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            if target.is_dir() {
                continue;
            }
            if target.exists() {
                return Err(merge_err(format!(
                    "{} is a file in the destination but a directory in the source",
                    relative.display()
                )));
            }
            fs::create_dir(&target)
                .map_err(|e| merge_err(format!("mkdir {}: {}", relative.display(), e)))?;
            stats.dirs_created += 1;
        } else if file_type.is_file() {
            if target.is_dir() {
                return Err(merge_err(format!(
                    "{} is a directory in the destination but a file in the source",
                    relative.display()
                )));
            }
            let replaced = target.exists();
            fs::copy(entry.path(), &target)
                .map_err(|e| merge_err(format!("copy {}: {}", relative.display(), e)))?;
            if replaced {
                stats.files_replaced += 1;
            } else {
                stats.files_added += 1;
            }
        } else {
            debug!("Skipping special file during merge: {}", entry.path().display());
        }
    }

    info!(
        "Merged {} -> {} ({} added, {} replaced, {} dirs)",
        src.display(),
        dst.display(),
        stats.files_added,
        stats.files_replaced,
        stats.dirs_created
    );
    Ok(stats)
}
