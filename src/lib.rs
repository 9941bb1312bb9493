//! # doctext
//!
//! Plain text extraction from Word (.docx) documents.
//!
//! A Word document is a ZIP package whose main content lives in the
//! `word/document.xml` part. This library opens the package, walks that
//! part in document order, and concatenates its text runs, emitting one
//! newline per paragraph and per explicit line break.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doctext::{extract_text, extract_to_file};
//!
//! // Extract to a String
//! let text = extract_text("report.docx")?;
//! println!("{}", text);
//!
//! // Extract straight to a UTF-8 text file
//! extract_to_file("report.docx", "report.txt")?;
//! # Ok::<(), doctext::Error>(())
//! ```
//!
//! ## Lower-level API
//!
//! ```no_run
//! use doctext::docx::DocxParser;
//!
//! let parser = DocxParser::open("report.docx")?;
//! let text = parser.extract_text()?;
//! # Ok::<(), doctext::Error>(())
//! ```

pub mod detect;
pub mod docx;
pub mod error;
pub mod package;

// Re-exports
pub use detect::is_zip_file;
pub use docx::DocxParser;
pub use error::{Error, Result};
pub use package::WordPackage;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Extract plain text from a Word document at `path`.
///
/// # Example
///
/// ```no_run
/// use doctext::extract_text;
///
/// let text = extract_text("report.docx")?;
/// println!("{}", text);
/// # Ok::<(), doctext::Error>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let parser = DocxParser::open(path)?;
    parser.extract_text()
}

/// Extract plain text from in-memory document bytes.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    let parser = DocxParser::from_bytes(data.to_vec())?;
    parser.extract_text()
}

/// Extract plain text from `source` and write it as UTF-8 to
/// `destination`, replacing any existing file there.
///
/// A missing source is reported as [`Error::NotFound`] before any I/O is
/// attempted; the destination is never created or touched in that case,
/// nor when extraction fails for any other reason.
///
/// # Example
///
/// ```no_run
/// use doctext::extract_to_file;
///
/// extract_to_file("report.docx", "report.txt")?;
/// # Ok::<(), doctext::Error>(())
/// ```
pub fn extract_to_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<()> {
    let source = source.as_ref();
    if !source.exists() {
        return Err(Error::NotFound(source.to_path_buf()));
    }

    let text = extract_text(source)?;

    let destination = destination.as_ref();
    fs::write(destination, text)?;
    debug!(source = %source.display(), destination = %destination.display(), "extraction written");
    Ok(())
}
