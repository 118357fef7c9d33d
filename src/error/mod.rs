//! # Error Module
//!
//! Error types for the media archiver.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - paths, file names, what went wrong
//! - **Two severities** - setup errors abort the run, per-file errors
//!   skip the file and let the walk continue

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ArchiverError {
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("Failed to traverse source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Fatal errors detected before or during setup; the run never starts
/// (or aborts) when one of these occurs.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to resolve working directory: {source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    #[error("Source directory not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Source path is not a directory: {path}")]
    SourceNotADirectory { path: PathBuf },

    #[error("Failed to create archive root {path}: {source}")]
    CreateArchiveRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-file errors; the file is skipped and the walk continues.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read modification time of {path}: {source}")]
    ModifiedTime {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to hash {path}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create partition directory {path}: {source}")]
    CreatePartition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} to {to}: {source}")]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ArchiverError>;
