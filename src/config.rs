// src/config.rs

//! Storage layout configuration
//!
//! The layout is read from a small TOML file:
//!
//! ```toml
//! storage_root = "/ext"
//! packages_dir = "animation_packs"
//! active_dir = "dolphin"
//! backup_dir = "dolphin_backup"
//!
//! [single_defaults]
//! max_level = 30
//! weight = 5
//! ```
//!
//! Every key is optional. Relative directories are resolved against
//! `storage_root`; absolute ones are used as-is.

use crate::error::{Error, Result};
use crate::manifest::EntryDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/themepack/config.toml";

fn default_storage_root() -> PathBuf {
    PathBuf::from("/ext")
}

fn default_packages_dir() -> PathBuf {
    PathBuf::from("animation_packs")
}

fn default_active_dir() -> PathBuf {
    PathBuf::from("dolphin")
}

fn default_backup_dir() -> PathBuf {
    PathBuf::from("dolphin_backup")
}

/// Where packages, the active configuration and its backup live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Mount point of the storage volume
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,

    /// Directory holding one subdirectory per theme package
    #[serde(default = "default_packages_dir")]
    pub packages_dir: PathBuf,

    /// The active configuration directory
    #[serde(default = "default_active_dir")]
    pub active_dir: PathBuf,

    /// The single backup slot
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,

    /// Fields written into the manifest synthesized for a single animation
    #[serde(default)]
    pub single_defaults: EntryDefaults,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            packages_dir: default_packages_dir(),
            active_dir: default_active_dir(),
            backup_dir: default_backup_dir(),
            single_defaults: EntryDefaults::default(),
        }
    }
}

impl LibraryConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_toml_str(&content)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No configuration at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(Error::open(path, e)),
        }
    }

    /// Replace the storage root, keeping the directory names
    pub fn with_storage_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.storage_root = root.into();
        self
    }

    fn validate(&self) -> Result<()> {
        let dirs = [
            ("packages_dir", &self.packages_dir),
            ("active_dir", &self.active_dir),
            ("backup_dir", &self.backup_dir),
        ];
        for (key, dir) in dirs {
            if dir.as_os_str().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", key)));
            }
        }
        if self.active_dir == self.backup_dir {
            return Err(Error::Config(
                "active_dir and backup_dir must differ".to_string(),
            ));
        }
        let d = &self.single_defaults;
        if d.min_level > d.max_level || d.min_butthurt > d.max_butthurt {
            return Err(Error::Config(
                "single_defaults minimums exceed maximums".to_string(),
            ));
        }
        Ok(())
    }

    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.storage_root.join(dir)
        }
    }

    /// Resolved package root
    pub fn packages_path(&self) -> PathBuf {
        self.resolve(&self.packages_dir)
    }

    /// Resolved active configuration directory
    pub fn active_path(&self) -> PathBuf {
        self.resolve(&self.active_dir)
    }

    /// Resolved backup directory
    pub fn backup_path(&self) -> PathBuf {
        self.resolve(&self.backup_dir)
    }
}
