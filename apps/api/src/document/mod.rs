//! Document text extraction — the collaborator boundary in front of the
//! heuristic core. Receives raw upload bytes plus a declared media type and
//! produces plain text; the core never touches binary document formats.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use thiserror::Error;

/// The document formats the ingestion endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    /// `application/msword`. Accepted for compatibility; see `extract_document_text`.
    DocLegacy,
    /// OOXML Word (`.docx`).
    Docx,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "application/msword" => Some(Self::DocLegacy),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Word package is not readable: {0}")]
    Package(#[from] zip::result::ZipError),

    #[error("Word document XML is malformed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed reading document part: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts the full plain text of an uploaded document.
///
/// Legacy `.doc` uploads go through the OOXML path too: files misdeclared as
/// `application/msword` are frequently zip packages, and genuine binary `.doc`
/// payloads fail inside the package reader and surface as a processing error.
pub fn extract_document_text(bytes: &[u8], media_type: MediaType) -> Result<String, DocumentError> {
    match media_type {
        MediaType::Pdf => Ok(pdf_extract::extract_text_from_mem(bytes)?),
        MediaType::Docx | MediaType::DocLegacy => docx_text(bytes),
    }
}

fn docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    document_xml_text(&xml)
}

/// Streams `word/document.xml`, collecting `<w:t>` text runs and emitting a
/// newline at each paragraph end so the normalizer sees real line structure.
fn document_xml_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::Text(e)) if in_text_run => {
                let run = e.unescape().map_err(quick_xml::Error::from)?;
                text.push_str(&run);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOCX_MIME: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    fn minimal_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer
            .start_file("word/document.xml", options)
            .expect("start zip entry");
        writer
            .write_all(document_xml.as_bytes())
            .expect("write zip entry");
        writer.finish().expect("finish zip").into_inner()
    }

    #[test]
    fn test_media_type_from_mime() {
        assert_eq!(MediaType::from_mime("application/pdf"), Some(MediaType::Pdf));
        assert_eq!(
            MediaType::from_mime("application/msword"),
            Some(MediaType::DocLegacy)
        );
        assert_eq!(MediaType::from_mime(DOCX_MIME), Some(MediaType::Docx));
        assert_eq!(MediaType::from_mime("text/plain"), None);
        assert_eq!(MediaType::from_mime("image/png"), None);
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<?xml version="1.0"?>
            <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
              <w:body>
                <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
                <w:p><w:r><w:t>Senior </w:t></w:r><w:r><w:t>Engineer</w:t></w:r></w:p>
              </w:body>
            </w:document>"#;
        let bytes = minimal_docx(xml);
        let text = extract_document_text(&bytes, MediaType::Docx).expect("docx extracts");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Jane Doe", "Senior Engineer"]);
    }

    #[test]
    fn test_docx_entities_unescaped() {
        let xml = r#"<w:document xmlns:w="http://example"><w:body>
            <w:p><w:r><w:t>R&amp;D lead</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let bytes = minimal_docx(xml);
        let text = extract_document_text(&bytes, MediaType::Docx).expect("docx extracts");
        assert_eq!(text.trim(), "R&D lead");
    }

    #[test]
    fn test_binary_doc_payload_is_an_error() {
        // Not a zip package; the legacy path must fail, never panic.
        let result = extract_document_text(b"\xd0\xcf\x11\xe0 old word binary", MediaType::DocLegacy);
        assert!(matches!(result, Err(DocumentError::Package(_))));
    }

    #[test]
    fn test_docx_without_document_part_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("other.txt", options).expect("start");
        writer.write_all(b"nope").expect("write");
        let bytes = writer.finish().expect("finish").into_inner();
        let result = extract_document_text(&bytes, MediaType::Docx);
        assert!(matches!(result, Err(DocumentError::Package(_))));
    }
}
