// src/apply.rs

//! Apply, restore and delete for theme packages
//!
//! The active configuration directory is swapped out with a single directory
//! rename, so at any moment either the active directory or the backup holds
//! the previous configuration.
//!
//! # Apply lifecycle
//!
//! ```text
//! BACKUP -> PREPARE -> POPULATE -> DONE
//!   |          |          |
//!   |          |          +- failure: backup kept, active partially populated
//!   |          +- failure: backup kept, active missing
//!   +- failure: active untouched
//! ```
//!
//! Populate is not rolled back. The backup survives every failure after the
//! backup phase, so `restore` always brings back the previous configuration.

use crate::config::LibraryConfig;
use crate::error::{Error, Result};
use crate::filesystem::{MergeStats, merge_dir, remove_dir_recursive, rename_dir};
use crate::manifest::{EntryDefaults, ManifestEntry, write_manifest};
use crate::package::{MANIFEST_FILENAME, PackageVariant, ThemePackage};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Phase of an apply, used to report where it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyPhase {
    /// Moving the active directory into the backup slot
    Backup,
    /// Recreating the active directory
    Prepare,
    /// Copying the package into the active directory
    Populate,
}

impl fmt::Display for ApplyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Backup => "backup",
            Self::Prepare => "prepare",
            Self::Populate => "populate",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a successful apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub package: String,
    pub variant: PackageVariant,
    /// Whether an existing active directory was moved into the backup slot
    pub backup_taken: bool,
    pub merge: MergeStats,
}

impl ApplyReport {
    /// Short description of what the apply did
    pub fn summary(&self) -> &'static str {
        self.variant.apply_summary()
    }
}

/// Owns the active and backup directories and every change made to them
#[derive(Debug)]
pub struct ApplyEngine {
    package_root: PathBuf,
    active: PathBuf,
    backup: PathBuf,
    single_defaults: EntryDefaults,
    has_backup: bool,
}

impl ApplyEngine {
    pub fn new(
        package_root: impl Into<PathBuf>,
        active: impl Into<PathBuf>,
        backup: impl Into<PathBuf>,
    ) -> Self {
        let backup = backup.into();
        let has_backup = backup.is_dir();
        Self {
            package_root: package_root.into(),
            active: active.into(),
            backup,
            single_defaults: EntryDefaults::default(),
            has_backup,
        }
    }

    /// Build an engine for the layout described by `config`
    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(
            config.packages_path(),
            config.active_path(),
            config.backup_path(),
        )
        .with_single_defaults(config.single_defaults)
    }

    /// Fields written into manifests synthesized for single animations
    pub fn with_single_defaults(mut self, defaults: EntryDefaults) -> Self {
        self.single_defaults = defaults;
        self
    }

    /// Whether a backup of a previous configuration exists
    pub fn backup_exists(&self) -> bool {
        self.has_backup
    }

    /// Re-read the backup flag from disk
    pub fn refresh(&mut self) -> bool {
        self.has_backup = self.backup.is_dir();
        self.has_backup
    }

    /// Apply `package` to the active configuration
    ///
    /// The current active directory (if any) replaces the backup first. If a
    /// later phase fails, the backup is left in place and the error is
    /// returned as-is; the failing phase is logged.
    pub fn apply(&mut self, package: &ThemePackage) -> Result<ApplyReport> {
        let package_dir = package.dir(&self.package_root)?;
        if !package_dir.is_dir() {
            return Err(Error::NotFound(package_dir));
        }

        info!("Applying {} [{}]", package.name(), package.variant());

        let backup_taken = self
            .backup_active()
            .inspect_err(|e| self.log_failure(ApplyPhase::Backup, package, e))?;

        fs::create_dir_all(&self.active)
            .map_err(|e| Error::open(&self.active, e))
            .inspect_err(|e| self.log_failure(ApplyPhase::Prepare, package, e))?;

        let merge = self
            .populate(package, &package_dir)
            .inspect_err(|e| self.log_failure(ApplyPhase::Populate, package, e))?;

        info!(
            "{}: {} ({} files)",
            package.name(),
            package.variant().apply_summary(),
            merge.total_files()
        );

        Ok(ApplyReport {
            package: package.name().to_string(),
            variant: package.variant(),
            backup_taken,
            merge,
        })
    }

    fn log_failure(&self, phase: ApplyPhase, package: &ThemePackage, e: &Error) {
        error!("Apply of {} failed during {}: {}", package.name(), phase, e);
        if phase != ApplyPhase::Backup && self.has_backup {
            warn!(
                "Previous configuration remains in {}",
                self.backup.display()
            );
        }
    }

    /// Move the active directory into the backup slot
    ///
    /// Returns `false` when there was no active directory to back up.
    fn backup_active(&mut self) -> Result<bool> {
        if !self.active.exists() {
            debug!("No active directory at {}, nothing to back up", self.active.display());
            return Ok(false);
        }

        if remove_dir_recursive(&self.backup)? {
            debug!("Discarded previous backup {}", self.backup.display());
        }
        // The old backup is gone either way from here on
        self.has_backup = false;

        rename_dir(&self.active, &self.backup)?;
        self.has_backup = true;
        info!("Backed up {} to {}", self.active.display(), self.backup.display());
        Ok(true)
    }

    fn populate(&self, package: &ThemePackage, package_dir: &Path) -> Result<MergeStats> {
        let variant = package.variant();
        match variant {
            PackageVariant::Pack | PackageVariant::AnimsPack => {
                merge_dir(&variant.animation_root(package_dir), &self.active)
            }
            PackageVariant::Single => {
                // merge_dir creates <active>/<name> itself
                let mut stats = merge_dir(package_dir, &self.active.join(package.name()))?;

                write_manifest(
                    &self.active.join(MANIFEST_FILENAME),
                    &[ManifestEntry::new(package.name(), self.single_defaults)],
                )?;
                stats.files_added += 1;
                Ok(stats)
            }
        }
    }

    /// Put the backup back in place of the active directory
    ///
    /// Fails with `NotFound` and changes nothing when there is no backup.
    pub fn restore(&mut self) -> Result<()> {
        if !self.refresh() {
            warn!("No backup at {} to restore", self.backup.display());
            return Err(Error::NotFound(self.backup.clone()));
        }

        if remove_dir_recursive(&self.active)? {
            debug!("Removed active directory {}", self.active.display());
        }

        rename_dir(&self.backup, &self.active).inspect_err(|e| {
            error!("Restore failed: {}", e);
        })?;
        self.has_backup = false;

        info!("Restored {} from {}", self.active.display(), self.backup.display());
        Ok(())
    }

    /// Remove a package's source directory from the package root
    ///
    /// The active configuration and the backup are not touched.
    pub fn delete(&self, package: &ThemePackage) -> Result<()> {
        let package_dir = package.dir(&self.package_root)?;
        if !package_dir.is_dir() {
            return Err(Error::NotFound(package_dir));
        }

        remove_dir_recursive(&package_dir).inspect_err(|e| {
            error!("Delete of {} failed: {}", package.name(), e);
        })?;
        info!("Deleted {}", package.name());
        Ok(())
    }
}
