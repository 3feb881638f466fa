// src/preview.rs

//! First-frame preview of a theme package
//!
//! A preview is the decoded `frame_0.bm` of the package's first animation.
//! Where that animation lives depends only on the package variant:
//!
//! ```text
//! Single     <pkg>/meta.txt                 <pkg>/frame_0.bm
//! Pack       <pkg>/<first>/meta.txt         <pkg>/<first>/frame_0.bm
//! AnimsPack  <pkg>/Anims/<first>/meta.txt   <pkg>/Anims/<first>/frame_0.bm
//! ```
//!
//! where `<first>` is the first entry named in the package manifest.

use crate::bitmap::{DecodedBitmap, MAX_FRAME_LEN, check_frame_len, decode_frame};
use crate::error::{Error, Result};
use crate::filesystem::path::sanitize_package_name;
use crate::manifest::first_entry_name;
use crate::manifest::meta::parse_dimensions;
use crate::package::{FIRST_FRAME_FILENAME, META_FILENAME, PackageVariant, ThemePackage};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads first-frame previews for packages under one package root
#[derive(Debug, Clone)]
pub struct PreviewLoader {
    root: PathBuf,
}

impl PreviewLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the first animation of `package`
    pub fn animation_dir(&self, package: &ThemePackage) -> Result<PathBuf> {
        let package_dir = package.dir(&self.root)?;
        let variant = package.variant();

        match variant {
            PackageVariant::Single => Ok(package_dir),
            PackageVariant::Pack | PackageVariant::AnimsPack => {
                let manifest = variant
                    .manifest_path(&package_dir)
                    .ok_or_else(|| Error::NotFound(package_dir.clone()))?;
                let entry = first_entry_name(&manifest)
                    .ok_or_else(|| Error::NotFound(manifest.clone()))?;
                // The entry name becomes a path component, so hold it to the same rules
                let entry = sanitize_package_name(&entry)?;
                Ok(variant.animation_root(&package_dir).join(entry))
            }
        }
    }

    /// Decode the first frame of `package`, reporting why it failed
    pub fn try_load(&self, package: &ThemePackage) -> Result<DecodedBitmap> {
        let anim_dir = self.animation_dir(package)?;
        let dims = parse_dimensions(&anim_dir.join(META_FILENAME))?;
        let frame = read_frame(&anim_dir.join(FIRST_FRAME_FILENAME))?;
        decode_frame(&frame, dims.width, dims.height)
    }

    /// Decode the first frame of `package`, or `None` if any step fails
    pub fn load(&self, package: &ThemePackage) -> Option<DecodedBitmap> {
        match self.try_load(package) {
            Ok(bitmap) => Some(bitmap),
            Err(e) => {
                debug!("No preview for {}: {}", package.name(), e);
                None
            }
        }
    }
}

/// Read a frame file after checking its size against the decode bounds
fn read_frame(path: &Path) -> Result<Vec<u8>> {
    let mut file = fs::File::open(path).map_err(|e| Error::open(path, e))?;
    let len = file
        .metadata()
        .map_err(|e| Error::open(path, e))?
        .len();
    check_frame_len(len)?;

    // The file may grow after the size check; never read past the bound
    let mut bytes = Vec::with_capacity(len as usize);
    file.take(MAX_FRAME_LEN as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|source| Error::ReadIncomplete {
            path: path.to_path_buf(),
            source,
        })?;
    check_frame_len(bytes.len() as u64)?;

    if bytes.len() as u64 != len {
        return Err(Error::ReadIncomplete {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
        });
    }
    Ok(bytes)
}
