//! Input sanity checks for Word document packages.

use crate::error::{Error, Result};
use crate::package::WordPackage;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Content type of the main document part in a Word package.
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Verify that an opened package is a Word document.
///
/// Inspects `[Content_Types].xml` for the wordprocessingml main-document
/// content type. Packages without a usable content-types part are accepted
/// if they carry entries under `word/`.
pub fn ensure_word_package(package: &WordPackage) -> Result<()> {
    if let Ok(content_types) = package.read_xml("[Content_Types].xml") {
        if content_types.contains(DOCX_CONTENT_TYPE) {
            return Ok(());
        }
    }

    // Fallback: some producers omit or mangle [Content_Types].xml
    if package.entry_names().iter().any(|n| n.starts_with("word/")) {
        return Ok(());
    }

    Err(Error::NotWordDocument)
}
