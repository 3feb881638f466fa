// src/lib.rs

//! Themepack: a manager for swappable animation theme packages
//!
//! Theme packages live one per directory under a package root and come in
//! three layouts (see [`package`]). One of them at a time is applied to the
//! active configuration directory, with the previous configuration kept in a
//! single backup slot that can be restored.
//!
//! # Architecture
//!
//! - Scanning: classify each package directory once, by fixed precedence
//! - Parsing: manifests and animation descriptors are small line-oriented text
//! - Preview: decode the first frame of the first animation, bounded in size
//! - Apply: rename the active directory into the backup slot, then merge
//!
//! ```no_run
//! use themepack::{LibraryConfig, ThemeLibrary};
//!
//! # fn main() -> themepack::Result<()> {
//! let mut library = ThemeLibrary::open(LibraryConfig::default())?;
//! if let Some(first) = library.packages().first().cloned() {
//!     let report = library.apply(first.name())?;
//!     println!("{}", report.summary());
//! }
//! # Ok(())
//! # }
//! ```

pub mod apply;
pub mod bitmap;
pub mod config;
mod error;
pub mod filesystem;
pub mod format;
pub mod library;
pub mod manifest;
pub mod package;
pub mod preview;

pub use apply::{ApplyEngine, ApplyReport};
pub use config::LibraryConfig;
pub use error::{Error, Result};
pub use library::ThemeLibrary;
pub use package::{PackageInfo, PackageVariant, ThemePackage};
