// src/manifest/mod.rs

//! Animation manifest reading and writing
//!
//! A manifest is a small text file that must carry a fixed header signature
//! somewhere in its body and lists animations as line-leading `Name:` entries:
//!
//! ```text
//! Filetype: Flipper Animation Manifest
//! Version: 1
//!
//! Name: L1_Waves_128x50
//! Min butthurt: 0
//! Max butthurt: 5
//! Min level: 1
//! Max level: 3
//! Weight: 3
//! ```
//!
//! Only `Name:` tokens at the start of the file or directly after a newline
//! count as entries; the same token inside another field value is ignored.

pub mod meta;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Header signature every valid manifest contains
pub const MANIFEST_HEADER: &str = "Filetype: Flipper Animation Manifest";

/// Manifest format version written into synthesized manifests
pub const MANIFEST_VERSION: u32 = 1;

const ENTRY_TOKEN: &str = "Name:";

/// Read a whole text file, tolerating invalid UTF-8
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).map_err(|e| Error::open(path, e))?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|source| Error::ReadIncomplete {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&content).into_owned())
}

/// Byte offsets of every line-leading `Name:` token
fn entry_offsets(content: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = content.as_bytes();
    content
        .match_indices(ENTRY_TOKEN)
        .map(|(idx, _)| idx)
        .filter(move |&idx| idx == 0 || bytes[idx - 1] == b'\n')
}

/// Value of the entry starting at `offset`, trimmed of its leading spaces
fn entry_value(content: &str, offset: usize) -> &str {
    let rest = &content[offset + ENTRY_TOKEN.len()..];
    let line = rest.split('\n').next().unwrap_or_default();
    line.trim_start_matches(' ').trim_end_matches('\r')
}

/// Name of the first line-leading entry in `content`, if any
pub fn first_entry_in(content: &str) -> Option<&str> {
    entry_offsets(content)
        .next()
        .map(|offset| entry_value(content, offset))
        .filter(|name| !name.is_empty())
}

/// Read a manifest file and return its first entry's name
///
/// The header is not checked here; a manifest without entries, or one that
/// cannot be read, yields `None`.
pub fn first_entry_name(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(content) => first_entry_in(&content).map(str::to_string),
        Err(e) => {
            debug!("No first entry in {}: {}", path.display(), e);
            None
        }
    }
}

/// Result of validating a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Number of line-leading `Name:` entries
    pub entry_count: u32,
    /// Name of the first entry, if there is one
    pub first_entry: Option<String>,
}

impl ManifestSummary {
    /// Validate manifest text already in memory
    ///
    /// `path` is only used to label the error.
    pub fn parse_str(content: &str, path: &Path) -> Result<Self> {
        if !content.contains(MANIFEST_HEADER) {
            return Err(Error::ManifestInvalid(path.to_path_buf()));
        }

        let entry_count = entry_offsets(content).count() as u32;
        let first_entry = first_entry_in(content).map(str::to_string);

        Ok(Self {
            entry_count,
            first_entry,
        })
    }

    /// Read and validate a manifest file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_text(path)?;
        Self::parse_str(&content, path)
    }

    /// Validity flag and entry count, collapsing every failure to `(false, 0)`
    pub fn check(path: &Path) -> (bool, u32) {
        match Self::from_file(path) {
            Ok(summary) => (true, summary.entry_count),
            Err(e) => {
                warn!("Manifest check failed: {}", e);
                (false, 0)
            }
        }
    }
}

/// Behaviour fields written for an animation that has no manifest of its own
///
/// These are placeholders; nothing in a single-animation package says how
/// often or at which level the animation should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDefaults {
    pub min_butthurt: u32,
    pub max_butthurt: u32,
    pub min_level: u32,
    pub max_level: u32,
    pub weight: u32,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            min_butthurt: 0,
            max_butthurt: 14,
            min_level: 1,
            max_level: 30,
            weight: 5,
        }
    }
}

/// One animation entry in a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub fields: EntryDefaults,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, fields: EntryDefaults) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Render a manifest containing the given entries
pub fn render_manifest(entries: &[ManifestEntry]) -> String {
    let mut out = format!("{}\nVersion: {}\n", MANIFEST_HEADER, MANIFEST_VERSION);
    for entry in entries {
        let f = &entry.fields;
        out.push_str(&format!(
            "\nName: {}\nMin butthurt: {}\nMax butthurt: {}\nMin level: {}\nMax level: {}\nWeight: {}\n",
            entry.name, f.min_butthurt, f.max_butthurt, f.min_level, f.max_level, f.weight
        ));
    }
    out
}

/// Write a manifest file, replacing any existing one in a single rename
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::InvalidPath(format!("No parent for {}", path.display())))?;
    let content = render_manifest(entries);

    let write_err = |source: std::io::Error| Error::WriteIncomplete {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::open(parent, e))?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote manifest {} ({} entries)", path.display(), entries.len());
    Ok(())
}
