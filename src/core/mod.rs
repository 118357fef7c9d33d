//! # Core Module
//!
//! The CLI-agnostic archiving engine.
//!
//! ## Modules
//! - `filter` - Decides which files are supported media
//! - `fingerprint` - Computes content hashes for deduplication
//! - `naming` - Derives canonical destination names and partitions
//! - `archiver` - Orchestrates the walk-classify-hash-move pipeline

pub mod archiver;
pub mod filter;
pub mod fingerprint;
pub mod naming;

// Re-export commonly used types
pub use archiver::{ArchiveSummary, Archiver, DuplicateRecord, FileOutcome, FileStore, FsStore};
pub use filter::MediaFilter;
