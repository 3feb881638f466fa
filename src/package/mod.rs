// src/package/mod.rs

//! Theme package model and discovery
//!
//! Three on-disk layouts have accumulated over time and all are still in use:
//!
//! ```text
//! <root>/<name>/manifest.txt          Pack: manifest at the top level
//! <root>/<name>/Anims/manifest.txt    AnimsPack: manifest one level down
//! <root>/<name>/meta.txt              Single: one animation, no manifest
//! ```
//!
//! A package's variant is decided once at scan time and from then on selects
//! the only path used to reach its manifest, descriptor and frames.

mod info;
mod scanner;

pub use info::PackageInfo;
pub use scanner::{PackageScanner, RootState, ScanResult};

use crate::error::Result;
use crate::filesystem::path::package_dir;
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum number of packages returned by one scan
pub const MAX_PACKAGES: usize = 64;

/// Maximum package name length in bytes
pub const MAX_NAME_LEN: usize = 63;

/// Manifest file name
pub const MANIFEST_FILENAME: &str = "manifest.txt";

/// Animation descriptor file name
pub const META_FILENAME: &str = "meta.txt";

/// Subdirectory holding the manifest of an `AnimsPack`
pub const ANIMS_DIRNAME: &str = "Anims";

/// First frame of an animation, used for previews
pub const FIRST_FRAME_FILENAME: &str = "frame_0.bm";

/// On-disk layout of a theme package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageVariant {
    /// Manifest directly inside the package directory
    Pack,
    /// Manifest inside the `Anims/` subdirectory
    AnimsPack,
    /// A single animation with only a descriptor
    Single,
}

impl PackageVariant {
    /// Human-readable type label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pack => "Pack",
            Self::AnimsPack => "Anim Pack",
            Self::Single => "Single",
        }
    }

    /// Short prefix used in compact package listings
    pub fn menu_prefix(&self) -> &'static str {
        match self {
            Self::Pack => "[P] ",
            Self::AnimsPack => "[A] ",
            Self::Single => "[S] ",
        }
    }

    /// What a successful apply of this variant did
    pub fn apply_summary(&self) -> &'static str {
        match self {
            Self::Pack => "Pack merged",
            Self::AnimsPack => "Anims merged",
            Self::Single => "Anim + manifest",
        }
    }

    /// Directory whose contents make up the animations of this variant
    ///
    /// For packs this is what gets merged into the active configuration; for
    /// a single animation it is the animation directory itself.
    pub fn animation_root(&self, package_dir: &Path) -> PathBuf {
        match self {
            Self::Pack | Self::Single => package_dir.to_path_buf(),
            Self::AnimsPack => package_dir.join(ANIMS_DIRNAME),
        }
    }

    /// Location of this variant's manifest, if it has one
    pub fn manifest_path(&self, package_dir: &Path) -> Option<PathBuf> {
        match self {
            Self::Pack | Self::AnimsPack => {
                Some(self.animation_root(package_dir).join(MANIFEST_FILENAME))
            }
            Self::Single => None,
        }
    }
}

impl fmt::Display for PackageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A classified theme package
///
/// Packages are produced by a scan and never updated; any operation that
/// changes the package root invalidates them and requires a rescan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePackage {
    name: String,
    variant: PackageVariant,
}

impl ThemePackage {
    pub fn new(name: impl Into<String>, variant: PackageVariant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> PackageVariant {
        self.variant
    }

    /// The package's own directory under `root`
    pub fn dir(&self, root: &Path) -> Result<PathBuf> {
        package_dir(root, &self.name)
    }
}
