//! # media-archive CLI
//!
//! Command-line entry point for the media archiver.
//!
//! ## Usage
//! ```bash
//! media-archive
//! media-archive --source ./Raw --dest ../Archive --output json
//! ```

mod cli;

use media_archiver::Result;

fn main() -> Result<()> {
    cli::run()
}
