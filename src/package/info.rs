// src/package/info.rs

//! Display details for a single package

use super::{PackageVariant, ThemePackage};
use crate::bitmap::DecodedBitmap;
use crate::error::Result;
use crate::filesystem::dir_size;
use crate::format::format_size;
use crate::manifest::ManifestSummary;
use crate::preview::PreviewLoader;
use std::path::Path;

/// Derived, display-only details of a package
///
/// Computed on demand from the package directory and never persisted.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    pub name: String,
    pub variant: PackageVariant,
    pub type_label: &'static str,
    /// Animations the package contributes (0 when its manifest is invalid)
    pub animation_count: u32,
    /// Total size of all files under the package directory
    pub size_bytes: u64,
    pub preview: Option<DecodedBitmap>,
}

impl PackageInfo {
    /// Gather details for `package` under the package root `root`
    pub fn inspect(root: &Path, package: &ThemePackage) -> Result<Self> {
        let package_dir = package.dir(root)?;
        let variant = package.variant();

        let animation_count = match variant.manifest_path(&package_dir) {
            Some(manifest) => ManifestSummary::check(&manifest).1,
            None => 1,
        };

        Ok(Self {
            name: package.name().to_string(),
            variant,
            type_label: variant.label(),
            animation_count,
            size_bytes: dir_size(&package_dir),
            preview: PreviewLoader::new(root).load(package),
        })
    }

    /// Human-readable size
    pub fn size_display(&self) -> String {
        format_size(self.size_bytes)
    }
}
