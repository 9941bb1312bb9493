//! DOCX (Word) document parsing.
//!
//! This module reads the main document part of a Word package and
//! projects its text runs, paragraphs, and line breaks into plain text.

mod parser;

pub use parser::DocxParser;

/// XML namespace of the wordprocessingml vocabulary.
///
/// Only elements bound to this namespace participate in extraction.
pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Archive entry holding the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";
