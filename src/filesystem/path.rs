// src/filesystem/path.rs

//! Path sanitization for package names
//!
//! Package names are directory names under the package root. Every operation
//! that turns a name back into a path goes through here so a crafted name can
//! never address anything outside its own package directory.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Validate that a package name is a single, plain path component
///
/// # Examples
///
/// ```
/// use themepack::filesystem::path::sanitize_package_name;
///
/// assert_eq!(sanitize_package_name("Halloween").unwrap(), "Halloween");
/// assert!(sanitize_package_name("../dolphin").is_err());
/// assert!(sanitize_package_name("a/b").is_err());
/// ```
pub fn sanitize_package_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(Error::InvalidPath("Empty package name".to_string()));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::PathTraversal(format!(
            "Package name contains path separator: {}",
            name
        )));
    }

    if name == ".." || name == "." {
        return Err(Error::PathTraversal(format!(
            "Invalid package name: {}",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidPath(format!(
            "Package name contains NUL: {:?}",
            name
        )));
    }

    Ok(name)
}

/// Join a root directory with a sanitized package name
pub fn package_dir(root: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
    Ok(root.as_ref().join(sanitize_package_name(name)?))
}
