//! # Media Archiver
//!
//! Organizes photos and videos into a date-partitioned archive,
//! deduplicated by content hash.
//!
//! ## How it works
//! A single pass over the source tree classifies each file by extension,
//! fingerprints its content with MD5, derives a canonical name from the
//! modification time and fingerprint, and moves it into a
//! `<archive>/<YYYY-MM>/` partition. A file whose canonical destination
//! already exists is reported as a duplicate and left where it is, so
//! re-running over the same tree is safe.
//!
//! ## Architecture
//! The library is split into a core engine and a presentation layer:
//! - `core` - The walk-classify-hash-move pipeline
//! - `error` - Error taxonomy (fatal setup vs recoverable per-file)
//! - `cli` - Command-line interface

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::{ArchiveSummary, Archiver, DuplicateRecord};
pub use error::{ArchiverError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. When `verbose`
/// is set the filter is raised to debug; otherwise it comes from the
/// environment.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
