// src/package/scanner.rs

//! Package root scanning and classification

use super::{
    ANIMS_DIRNAME, MANIFEST_FILENAME, MAX_NAME_LEN, MAX_PACKAGES, META_FILENAME, PackageVariant,
    ThemePackage,
};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Whether the package root was there to be scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootState {
    /// The package root does not exist (e.g. no storage volume or no folder)
    Missing,
    /// The package root exists, whether or not it holds any packages
    Present,
}

/// Outcome of one scan of the package root
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Packages in directory enumeration order
    pub packages: Vec<ThemePackage>,
    pub root: RootState,
    /// Whether a backup of the active configuration exists
    pub backup_exists: bool,
    /// The scan stopped because the package limit was reached
    pub limit_reached: bool,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Look up a package by name
    pub fn find(&self, name: &str) -> Option<&ThemePackage> {
        self.packages.iter().find(|p| p.name() == name)
    }

    /// Placeholder text for an empty listing, distinguishing a missing root
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.packages.is_empty() {
            return None;
        }
        Some(match self.root {
            RootState::Missing => "[No SD / No folder]",
            RootState::Present => "[No themes found]",
        })
    }
}

/// Walks the package root and classifies each subdirectory
#[derive(Debug, Clone)]
pub struct PackageScanner {
    root: PathBuf,
    backup_dir: PathBuf,
    limit: usize,
}

impl PackageScanner {
    pub fn new(root: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            backup_dir: backup_dir.into(),
            limit: MAX_PACKAGES,
        }
    }

    /// Override the package limit (never above `MAX_PACKAGES`)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_PACKAGES);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Classify one package directory
    ///
    /// Precedence is fixed: a top-level manifest wins over a nested one, and
    /// either wins over a bare descriptor.
    pub fn classify(dir: &Path) -> Option<PackageVariant> {
        if dir.join(MANIFEST_FILENAME).is_file() {
            Some(PackageVariant::Pack)
        } else if dir.join(ANIMS_DIRNAME).join(MANIFEST_FILENAME).is_file() {
            Some(PackageVariant::AnimsPack)
        } else if dir.join(META_FILENAME).is_file() {
            Some(PackageVariant::Single)
        } else {
            None
        }
    }

    /// Scan the package root
    ///
    /// Directories are visited in enumeration order, not sorted. Entries that
    /// are not directories, have unusable names, or match no layout are
    /// skipped.
    pub fn scan(&self) -> Result<ScanResult> {
        let backup_exists = self.backup_dir.is_dir();

        if !self.root.is_dir() {
            warn!("Package root {} not found", self.root.display());
            return Ok(ScanResult {
                packages: Vec::new(),
                root: RootState::Missing,
                backup_exists,
                limit_reached: false,
            });
        }

        let entries = fs::read_dir(&self.root).map_err(|e| Error::open(&self.root, e))?;
        let mut packages = Vec::with_capacity(self.limit);
        let mut limit_reached = false;

        for entry in entries {
            if packages.len() >= self.limit {
                // Set only when something is actually left unvisited
                limit_reached = true;
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Failed to read entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };

            match entry.file_type() {
                Ok(ft) if ft.is_dir() => {}
                Ok(_) => continue,
                Err(e) => {
                    debug!("No file type for {}: {}", entry.path().display(), e);
                    continue;
                }
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping {:?} (name is not UTF-8)", raw);
                    continue;
                }
            };

            if name.len() > MAX_NAME_LEN {
                warn!("Skipping {} (name longer than {} bytes)", name, MAX_NAME_LEN);
                continue;
            }

            match Self::classify(&entry.path()) {
                Some(variant) => {
                    info!("[{}] {}", variant, name);
                    packages.push(ThemePackage::new(name, variant));
                }
                None => warn!("Skipping {} (unknown format)", name),
            }
        }

        info!(
            "Total: {} themes, backup: {}",
            packages.len(),
            if backup_exists { "yes" } else { "no" }
        );

        Ok(ScanResult {
            packages,
            root: RootState::Present,
            backup_exists,
            limit_reached,
        })
    }
}
