//! # CLI Module
//!
//! Command-line interface for the media archiver.
//!
//! ## Usage
//! ```bash
//! # Archive <cwd>/Raw into an Archive directory beside the cwd's parent
//! media-archive
//!
//! # Explicit roots
//! media-archive --source ~/import/Raw --dest ~/Pictures/Archive
//!
//! # JSON summary for scripting
//! media-archive --output json
//!
//! # Per-file log lines
//! media-archive --verbose
//! ```

use clap::{Parser, ValueEnum};
use console::{style, Term};
use media_archiver::error::SetupError;
use media_archiver::{ArchiveSummary, Archiver, Result};
use std::path::PathBuf;

/// Fixed name of the archive directory derived from the working directory
const ARCHIVE_DIR_NAME: &str = "Archive";

/// Media Archiver - date-partitioned, content-deduplicated photo archiving
#[derive(Parser, Debug)]
#[command(name = "media-archive")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to archive (default: <cwd>/Raw)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Archive root directory (default: an Archive directory beside the
    /// parent of the working directory)
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Verbose output (per-file archive/duplicate log lines)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (duplicate lines only)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    media_archiver::init_tracing(cli.verbose);

    // Working-directory resolution stays here at the boundary; the core
    // only ever sees explicit roots.
    let (source, dest) = match (cli.source, cli.dest) {
        (Some(source), Some(dest)) => (source, dest),
        (source, dest) => {
            let cwd = std::env::current_dir()
                .map_err(|e| SetupError::WorkingDirectory { source: e })?;
            let derived_dest = cwd
                .parent()
                .map(|parent| parent.join(ARCHIVE_DIR_NAME))
                .unwrap_or_else(|| cwd.join(ARCHIVE_DIR_NAME));
            (
                source.unwrap_or_else(|| cwd.join("Raw")),
                dest.unwrap_or(derived_dest),
            )
        }
    };

    let summary = Archiver::new(source, dest).run()?;

    match cli.output {
        OutputFormat::Pretty => print_pretty_results(&summary),
        OutputFormat::Json => print_json_results(&summary),
        OutputFormat::Minimal => print_minimal_results(&summary),
    }

    Ok(())
}

fn print_pretty_results(summary: &ArchiveSummary) {
    let term = Term::stderr();

    term.write_line(&format!(
        "{} Archive Run Complete",
        style("✓").green().bold()
    ))
    .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} files archived in {:.1}s",
        style(summary.archived).cyan(),
        summary.duration_ms as f64 / 1000.0
    ))
    .ok();

    if summary.skipped > 0 {
        term.write_line(&format!(
            "  {} files skipped (see log)",
            style(summary.skipped).yellow()
        ))
        .ok();
    }

    term.write_line("").ok();

    if summary.has_duplicates() {
        term.write_line(&format!(
            "{}",
            style("Duplicates (left in place):").bold().underlined()
        ))
        .ok();
        for dup in &summary.duplicates {
            println!("{} => {}", dup.original, dup.destination);
        }
    } else {
        term.write_line("  No duplicates found.").ok();
    }

    term.write_line("").ok();
    term.write_line(&format!("{}", style("Done.").dim())).ok();
}

fn print_json_results(summary: &ArchiveSummary) {
    println!(
        "{}",
        serde_json::to_string_pretty(summary).expect("summary serializes")
    );
}

fn print_minimal_results(summary: &ArchiveSummary) {
    for dup in &summary.duplicates {
        println!("{} => {}", dup.original, dup.destination);
    }
}
