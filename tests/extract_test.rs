//! End-to-end extraction tests over real files on disk.

use std::fs;
use std::io::{Cursor, Write};

use doctext::{extract_text_from_bytes, extract_to_file, Error};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Build a minimal Word package holding the given document part bytes.
fn build_package(document_part: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document_part).unwrap();

    zip.finish().unwrap();
    buffer
}

fn build_docx(body: &str) -> Vec<u8> {
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"{}\"><w:body>{}</w:body></w:document>",
        WORDML_NS, body
    );
    build_package(document.as_bytes())
}

const HELLO_WORLD_BODY: &str = "<w:p><w:r><w:t>Hello</w:t></w:r></w:p>\
                                <w:p><w:r><w:t>World</w:t></w:r></w:p>";

#[test]
fn extracts_two_paragraph_document_to_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.docx");
    let destination = dir.path().join("hello.txt");
    fs::write(&source, build_docx(HELLO_WORLD_BODY)).unwrap();

    extract_to_file(&source, &destination).unwrap();

    assert_eq!(fs::read_to_string(&destination).unwrap(), "Hello\nWorld\n");
}

#[test]
fn missing_source_is_reported_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("absent.docx");
    let destination = dir.path().join("out.txt");

    let err = extract_to_file(&source, &destination).unwrap_err();
    assert!(err.is_not_found());
    assert!(!destination.exists());
}

#[test]
fn missing_source_leaves_existing_destination_untouched() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("absent.docx");
    let destination = dir.path().join("out.txt");
    fs::write(&destination, "previous contents").unwrap();

    let err = extract_to_file(&source, &destination).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "previous contents"
    );
}

#[test]
fn garbage_source_fails_without_creating_destination() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("garbage.docx");
    let destination = dir.path().join("out.txt");
    fs::write(&source, b"these are arbitrary bytes, not a zip archive").unwrap();

    let err = extract_to_file(&source, &destination).unwrap_err();
    assert!(matches!(err, Error::ZipArchive(_)));
    assert!(!destination.exists());
}

#[test]
fn package_without_document_part_fails() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("empty.docx");
    let destination = dir.path().join("out.txt");

    // A Word-looking package with no word/document.xml inside.
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    zip.start_file("word/styles.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<w:styles/>").unwrap();
    zip.finish().unwrap();
    fs::write(&source, buffer).unwrap();

    let err = extract_to_file(&source, &destination).unwrap_err();
    assert!(matches!(err, Error::MissingPart(ref part) if part == "word/document.xml"));
    assert!(!destination.exists());
}

#[test]
fn foreign_package_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("workbook.docx");
    let destination = dir.path().join("out.txt");

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    zip.start_file("xl/workbook.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<workbook/>").unwrap();
    zip.finish().unwrap();
    fs::write(&source, buffer).unwrap();

    let err = extract_to_file(&source, &destination).unwrap_err();
    assert!(matches!(err, Error::NotWordDocument));
    assert!(!destination.exists());
}

#[test]
fn repeated_extraction_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.docx");
    let destination = dir.path().join("hello.txt");
    fs::write(&source, build_docx(HELLO_WORLD_BODY)).unwrap();

    extract_to_file(&source, &destination).unwrap();
    let first = fs::read(&destination).unwrap();

    extract_to_file(&source, &destination).unwrap();
    let second = fs::read(&destination).unwrap();

    assert_eq!(first, second);
}

#[test]
fn destination_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.docx");
    let destination = dir.path().join("hello.txt");
    fs::write(&source, build_docx(HELLO_WORLD_BODY)).unwrap();
    fs::write(&destination, "stale text that is longer than the new output").unwrap();

    extract_to_file(&source, &destination).unwrap();

    assert_eq!(fs::read_to_string(&destination).unwrap(), "Hello\nWorld\n");
}

#[test]
fn empty_document_produces_empty_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("empty.docx");
    let destination = dir.path().join("empty.txt");
    fs::write(&source, build_docx("")).unwrap();

    extract_to_file(&source, &destination).unwrap();

    assert!(destination.exists());
    assert_eq!(fs::read(&destination).unwrap(), b"");
}

#[test]
fn extracts_from_bytes() {
    let body = "<w:p><w:r><w:t>alpha</w:t><w:br/><w:t>beta</w:t></w:r></w:p>";
    let text = extract_text_from_bytes(&build_docx(body)).unwrap();
    assert_eq!(text, "alpha\nbeta\n");
}

#[test]
fn extracts_utf16_document_part() {
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-16\"?>\
         <w:document xmlns:w=\"{}\"><w:body>{}</w:body></w:document>",
        WORDML_NS, HELLO_WORLD_BODY
    );

    let mut bytes = vec![0xFF, 0xFE]; // UTF-16 LE BOM
    for unit in document.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }

    let text = extract_text_from_bytes(&build_package(&bytes)).unwrap();
    assert_eq!(text, "Hello\nWorld\n");
}
