//! Error types for the doctext library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for doctext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during text extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// The source document does not exist.
    ///
    /// Raised by the explicit existence check before any I/O is attempted,
    /// so a missing source never produces a destination file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required document part is missing from the archive.
    #[error("missing document part: {0}")]
    MissingPart(String),

    /// The archive is a valid ZIP but not a Word document package.
    #[error("not a Word document")]
    NotWordDocument,

    /// Error during text encoding conversion.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl Error {
    /// Whether this error is the not-found notice rather than an
    /// extraction failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
