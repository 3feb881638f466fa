// src/filesystem/size.rs

//! Recursive directory size accounting

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Sum the sizes of all regular files below `path`
///
/// Unreadable entries are skipped rather than failing the whole walk; a
/// missing or unreadable root yields 0.
pub fn dir_size(path: &Path) -> u64 {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", path.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => total += metadata.len(),
            Err(e) => debug!("No metadata for {}: {}", entry.path().display(), e),
        }
    }

    total
}
