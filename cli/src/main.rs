//! doctext CLI - Word document text extraction tool
//!
//! Extracts the plain text of .docx files to UTF-8 text files.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Reference workload, run when no paths are given.
const DEFAULT_JOBS: [(&str, &str); 2] = [
    ("WealthMax_SRS_v1.20.docx", "srs_utf8.txt"),
    ("Implementation Outline.docx", "outline_utf8.txt"),
];

/// Extract plain text from Word documents
#[derive(Parser)]
#[command(
    name = "doctext",
    version,
    about = "Extract plain text from Word documents",
    long_about = "doctext - Word document text extraction.\n\n\
                  Reads .docx files and writes their text content to UTF-8 text files,\n\
                  one newline per paragraph and per explicit line break.\n\n\
                  Run with no arguments to process the built-in document pairs."
)]
struct Cli {
    /// SOURCE DEST path pairs (e.g. `doctext report.docx report.txt`)
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    let jobs = match jobs_from(cli.paths) {
        Ok(jobs) => jobs,
        Err(message) => {
            eprintln!("{}: {}", "Error".red().bold(), message);
            return ExitCode::from(2);
        }
    };

    tracing::debug!(jobs = jobs.len(), "starting extraction");

    let mut failed = 0usize;
    for (source, destination) in &jobs {
        let pb = create_spinner(&format!("Extracting {}...", source.display()));
        let result = doctext::extract_to_file(source, destination);
        pb.finish_and_clear();

        match result {
            Ok(()) => {
                println!(
                    "{} Extracted to {}",
                    "✓".green().bold(),
                    destination.display()
                );
            }
            Err(e) if e.is_not_found() => {
                println!(
                    "{} File not found: {}",
                    "!".yellow().bold(),
                    source.display()
                );
            }
            Err(e) => {
                failed += 1;
                println!(
                    "{} Error reading {}: {}",
                    "✗".red().bold(),
                    source.display(),
                    e
                );
            }
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Turn the positional paths into extraction jobs.
///
/// With no paths, the built-in reference pairs run; otherwise the paths
/// must come in SOURCE DEST pairs.
fn jobs_from(paths: Vec<PathBuf>) -> Result<Vec<(PathBuf, PathBuf)>, String> {
    if paths.is_empty() {
        return Ok(DEFAULT_JOBS
            .iter()
            .map(|(source, dest)| (PathBuf::from(source), PathBuf::from(dest)))
            .collect());
    }

    if paths.len() % 2 != 0 {
        return Err(format!(
            "expected SOURCE DEST pairs, got {} path(s)",
            paths.len()
        ));
    }

    Ok(paths
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}

/// Set up the logging framework.
/// Reads log level filters from the `RUST_LOG` environment variable and
/// defaults to "info" if it is not set.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
