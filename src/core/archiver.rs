//! The walk-classify-hash-move pipeline.

use super::filter::MediaFilter;
use super::{fingerprint, naming};
use crate::error::{ArchiverError, FileError, Result, SetupError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// A collision detected during the run: the source file's base name and
/// the already-claimed destination, relative to the archive's parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    pub original: String,
    pub destination: String,
}

/// Per-file classification of one walk entry.
#[derive(Debug)]
pub enum FileOutcome {
    /// Relocated to the given destination path
    Archived(PathBuf),
    /// Destination already claimed; source left untouched
    Duplicate(DuplicateRecord),
    /// Could not be processed; source left untouched
    Skipped(FileError),
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveSummary {
    pub archived: usize,
    pub duplicates: Vec<DuplicateRecord>,
    pub skipped: usize,
    pub duration_ms: u64,
}

impl ArchiveSummary {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Filesystem operations the pipeline performs on files.
///
/// Implement this trait to classify files without real side effects
/// (e.g., in tests or a future dry-run mode).
pub trait FileStore {
    /// Content fingerprint of the file at `path`
    fn fingerprint(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a file already exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Idempotent directory creation
    fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    /// Move a file; same-volume rename, atomic where the filesystem allows
    fn relocate(&self, from: &Path, to: &Path) -> std::io::Result<()>;
}

/// The real filesystem
pub struct FsStore;

impl FileStore for FsStore {
    fn fingerprint(&self, path: &Path) -> std::io::Result<String> {
        fingerprint::fingerprint_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        fs::create_dir_all(path)
    }

    fn relocate(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        fs::rename(from, to)
    }
}

/// Archives media files from a source tree into a date-partitioned,
/// content-deduplicated archive.
pub struct Archiver<S: FileStore = FsStore> {
    source_root: PathBuf,
    archive_root: PathBuf,
    filter: MediaFilter,
    store: S,
}

impl Archiver<FsStore> {
    /// Create an archiver over the real filesystem
    pub fn new(source_root: impl Into<PathBuf>, archive_root: impl Into<PathBuf>) -> Self {
        Self::with_store(source_root, archive_root, FsStore)
    }
}

impl<S: FileStore> Archiver<S> {
    /// Create an archiver with a custom file store
    pub fn with_store(
        source_root: impl Into<PathBuf>,
        archive_root: impl Into<PathBuf>,
        store: S,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            archive_root: archive_root.into(),
            filter: MediaFilter::new(),
            store,
        }
    }

    /// Run the pipeline: walk the source tree and archive every supported
    /// media file, collecting duplicates and skips along the way.
    ///
    /// Setup failures and traversal errors abort the run; per-file failures
    /// are logged, counted, and skipped.
    pub fn run(&self) -> Result<ArchiveSummary> {
        let start = Instant::now();
        self.check_setup()?;

        let mut archived = 0usize;
        let mut skipped = 0usize;
        let mut duplicates = Vec::new();

        for entry in WalkDir::new(&self.source_root) {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(extension) = self.filter.classify(path) else {
                continue;
            };

            match self.process_file(path, &extension) {
                FileOutcome::Archived(destination) => {
                    tracing::debug!(
                        source = %path.display(),
                        destination = %destination.display(),
                        "archived"
                    );
                    archived += 1;
                }
                FileOutcome::Duplicate(record) => {
                    tracing::debug!(
                        original = %record.original,
                        destination = %record.destination,
                        "duplicate"
                    );
                    duplicates.push(record);
                }
                FileOutcome::Skipped(error) => {
                    tracing::warn!("{error}");
                    skipped += 1;
                }
            }
        }

        Ok(ArchiveSummary {
            archived,
            duplicates,
            skipped,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Classify and process a single qualifying file.
    pub fn process_file(&self, path: &Path, extension: &str) -> FileOutcome {
        match self.try_process(path, extension) {
            Ok(outcome) => outcome,
            Err(error) => FileOutcome::Skipped(error),
        }
    }

    fn try_process(
        &self,
        path: &Path,
        extension: &str,
    ) -> std::result::Result<FileOutcome, FileError> {
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|source| FileError::ModifiedTime {
                path: path.to_path_buf(),
                source,
            })?;
        let capture = naming::format_capture_time(modified);

        let digest = self
            .store
            .fingerprint(path)
            .map_err(|source| FileError::Hash {
                path: path.to_path_buf(),
                source,
            })?;

        let name = naming::canonical_name(&capture, &digest, extension);
        let destination = naming::destination_path(&self.archive_root, &capture, &name);

        // Partition directory is created before the collision check, so a
        // run that finds only duplicates still leaves the partitions behind,
        // matching re-run behavior.
        let partition = destination.parent().unwrap_or(&self.archive_root);
        self.store
            .create_dir_all(partition)
            .map_err(|source| FileError::CreatePartition {
                path: partition.to_path_buf(),
                source,
            })?;

        if self.store.exists(&destination) {
            // Name collision only; the existing target's content is not
            // compared. First file to claim a canonical name wins.
            return Ok(FileOutcome::Duplicate(DuplicateRecord {
                original: base_name(path),
                destination: self.relative_destination(&destination),
            }));
        }

        self.store
            .relocate(path, &destination)
            .map_err(|source| FileError::Relocate {
                from: path.to_path_buf(),
                to: destination.clone(),
                source,
            })?;

        Ok(FileOutcome::Archived(destination))
    }

    fn check_setup(&self) -> Result<()> {
        // Source is validated before the archive root is touched, so a
        // missing source never creates the destination.
        match fs::metadata(&self.source_root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(SetupError::SourceNotADirectory {
                    path: self.source_root.clone(),
                }
                .into())
            }
            Err(_) => {
                return Err(SetupError::SourceNotFound {
                    path: self.source_root.clone(),
                }
                .into())
            }
        }

        self.store
            .create_dir_all(&self.archive_root)
            .map_err(|source| {
                ArchiverError::Setup(SetupError::CreateArchiveRoot {
                    path: self.archive_root.clone(),
                    source,
                })
            })
    }

    /// Destination path relative to the archive's parent directory, for the
    /// duplicate report. Falls back to the absolute path when the prefix
    /// does not apply.
    fn relative_destination(&self, destination: &Path) -> String {
        let base = self.archive_root.parent().unwrap_or(&self.archive_root);
        destination
            .strip_prefix(base)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| destination.display().to_string())
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
