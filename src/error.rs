// src/error.rs

//! Error types for theme package operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning, parsing, previewing or applying themes
#[derive(Error, Debug)]
pub enum Error {
    /// An expected file or directory is absent
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A file or directory exists but could not be opened
    #[error("failed to open {}: {source}", path.display())]
    OpenFailed { path: PathBuf, source: io::Error },

    /// A read stopped before the whole file was consumed
    #[error("incomplete read of {}: {source}", path.display())]
    ReadIncomplete { path: PathBuf, source: io::Error },

    /// A write stopped before the whole buffer was persisted
    #[error("incomplete write to {}: {source}", path.display())]
    WriteIncomplete { path: PathBuf, source: io::Error },

    /// Directory rename (backup or restore swap) failed
    #[error("failed to rename {} -> {}: {source}", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// Recursive removal of a directory tree failed
    #[error("failed to remove {}: {source}", path.display())]
    RecursiveDeleteFailed { path: PathBuf, source: io::Error },

    /// Merging a source tree into a destination tree failed
    #[error("failed to merge {} into {}: {reason}", from.display(), to.display())]
    MergeFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// A bounded quantity (frame length, bitmap dimension) is out of range
    #[error("{what} out of bounds: {value} not in [{min}, {max}]")]
    SizeOutOfBounds {
        what: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    /// Frame decompression produced no output, partial output or overran the buffer
    #[error("frame decode failed: {0}")]
    DecodeFailed(String),

    /// Descriptor is missing a required field or the field is not numeric
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Manifest lacks the header signature
    #[error("invalid manifest (missing header): {}", .0.display())]
    ManifestInvalid(PathBuf),

    /// Package name would escape the package root
    #[error("path traversal rejected: {0}")]
    PathTraversal(String),

    /// Package name is empty or otherwise unusable as a path component
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Classify an open failure, distinguishing a missing path from other I/O errors
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::OpenFailed { path, source }
        }
    }

    /// Returns true if this error means the target simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
