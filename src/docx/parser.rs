//! DOCX parser implementation.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use tracing::debug;

use crate::detect::ensure_word_package;
use crate::error::{Error, Result};
use crate::package::WordPackage;

use super::{DOCUMENT_PART, WORDML_NS};

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    package: WordPackage,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let package = WordPackage::open(path)?;
        Self::from_package(package)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let package = WordPackage::from_bytes(data)?;
        Self::from_package(package)
    }

    /// Create a parser from an opened package.
    fn from_package(package: WordPackage) -> Result<Self> {
        ensure_word_package(&package)?;
        Ok(Self { package })
    }

    /// Extract the plain text of the main document part.
    ///
    /// Text runs are concatenated verbatim; each paragraph contributes a
    /// trailing newline and each explicit line break a newline at the
    /// point it occurs.
    pub fn extract_text(&self) -> Result<String> {
        let xml = self.package.read_xml(DOCUMENT_PART)?;
        debug!(bytes = xml.len(), "read {}", DOCUMENT_PART);

        let text = project_document_xml(&xml)?;
        debug!(chars = text.len(), "extracted document text");
        Ok(text)
    }
}

fn in_wordml(ns: &ResolveResult) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == WORDML_NS.as_bytes())
}

/// Walk the document XML in document order and project it to plain text.
///
/// Emission rules, applied only to elements in the wordprocessingml
/// namespace:
/// - `t`: character data is appended exactly, no trimming or
///   normalization;
/// - `p`: one newline, appended when the paragraph closes so the
///   separator always follows that paragraph's own runs;
/// - `br`: one newline where the break occurs;
/// - anything else: ignored.
fn project_document_xml(xml: &str) -> Result<String> {
    let mut reader = NsReader::from_str(xml);

    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        let (ns, event) = reader
            .read_resolved_event()
            .map_err(|e| Error::XmlParse(e.to_string()))?;

        match event {
            Event::Start(e) if in_wordml(&ns) => match e.local_name().as_ref() {
                b"t" => in_text_run = true,
                b"br" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) if in_wordml(&ns) => match e.local_name().as_ref() {
                // An empty paragraph still separates lines.
                b"p" | b"br" => text.push('\n'),
                _ => {}
            },
            Event::End(e) if in_wordml(&ns) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text_run => {
                let value = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                text.push_str(&value);
            }
            Event::CData(e) if in_text_run => {
                text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
