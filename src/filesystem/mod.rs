// src/filesystem/mod.rs

//! Filesystem operations for themepack
//!
//! This module provides:
//! - Whole-directory primitives used by the apply engine (rename, remove, merge)
//! - Recursive size accounting for package info
//! - Package-name sanitization so names can never escape the package root

mod ops;
pub mod path;
mod size;

pub use ops::{MergeStats, merge_dir, remove_dir_recursive, rename_dir};
pub use size::dir_size;
