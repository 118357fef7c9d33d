//! Canonical destination naming.
//!
//! An archived file is named `{capture date}_{fingerprint}.{extension}` and
//! bucketed into a year-month partition directory. Two files with identical
//! content, identical modification time to the second, and identical
//! extension derive the same name - that name is the deduplication key.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Timestamp format used in canonical names, e.g. `2023-10-05_143000`.
const CAPTURE_FORMAT: &str = "%Y-%m-%d_%H%M%S";

/// Format a file's modification time for use in its canonical name.
pub fn format_capture_time(modified: SystemTime) -> String {
    let datetime: DateTime<Local> = modified.into();
    datetime.format(CAPTURE_FORMAT).to_string()
}

/// Build the canonical archive filename for a file.
pub fn canonical_name(capture: &str, fingerprint: &str, extension: &str) -> String {
    format!("{}_{}.{}", capture, fingerprint, extension)
}

/// The year-month partition for a formatted capture time, e.g. `2023-10`.
pub fn year_month(capture: &str) -> &str {
    &capture[..7]
}

/// Full destination path: `<archive_root>/<YYYY-MM>/<canonical name>`.
pub fn destination_path(archive_root: &Path, capture: &str, name: &str) -> PathBuf {
    archive_root.join(year_month(capture)).join(name)
}
