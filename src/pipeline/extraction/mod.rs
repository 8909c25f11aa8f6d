pub mod docx;

use base64::Engine;
use thiserror::Error;

use crate::document::Document;

/// MIME type of modern word-processing documents (OOXML container).
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Local extraction failures. These never cross the pipeline boundary: the
/// extractor recovers by transmitting the document as binary instead.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("DOCX parse failed: {0}")]
    DocxParse(String),

    #[error("DOCX contains no extractable text")]
    NoText,
}

/// Content block of a model request: exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContent {
    /// Inline UTF-8 text.
    Text(String),
    /// Base64-encoded bytes with their MIME type.
    Binary { data: String, mime_type: String },
}

/// Convert a document into a request content block.
///
/// DOCX documents get a best-effort structural text extraction; everything
/// else, and any DOCX that fails to yield text, is transmitted as inline
/// base64 with a resolved MIME type.
pub fn extract_content(document: &Document) -> DocumentContent {
    if is_docx(document) {
        match docx::extract_docx_text(document.bytes()) {
            Ok(text) => {
                tracing::debug!(
                    document = %document.name(),
                    chars = text.len(),
                    "DOCX text extracted"
                );
                return DocumentContent::Text(text);
            }
            Err(e) => {
                tracing::warn!(
                    document = %document.name(),
                    error = %e,
                    "DOCX extraction failed, falling back to binary"
                );
            }
        }
    }

    let data = base64::engine::general_purpose::STANDARD.encode(document.bytes());
    DocumentContent::Binary {
        data,
        mime_type: resolve_mime_type(document),
    }
}

fn is_docx(document: &Document) -> bool {
    document.declared_mime() == Some(DOCX_MIME)
        || document.name().to_lowercase().ends_with(".docx")
}

/// Resolve the MIME type for binary transmission: the declared type wins,
/// then a fixed extension table, then a filename-based guess, then the
/// generic octet-stream fallback.
pub fn resolve_mime_type(document: &Document) -> String {
    if let Some(declared) = document.declared_mime() {
        if !declared.trim().is_empty() {
            return declared.to_string();
        }
    }

    let ext = document.extension().unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf".into(),
        "docx" => DOCX_MIME.into(),
        "txt" => "text/plain".into(),
        "md" => "text/markdown".into(),
        "jpg" | "jpeg" => "image/jpeg".into(),
        "png" => "image/png".into(),
        _ => mime_guess::from_path(document.name())
            .first_raw()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use docx_rs::{Docx, Paragraph, Run};

    fn binary_doc(name: &str) -> Document {
        Document::new(name, vec![0x01, 0x02, 0x03], None)
    }

    // ── MIME resolution ─────────────────────────────────────────────

    #[test]
    fn known_extensions_map_to_expected_mime() {
        for (name, mime) in [
            ("contract.pdf", "application/pdf"),
            ("contract.docx", DOCX_MIME),
            ("contract.txt", "text/plain"),
            ("contract.md", "text/markdown"),
            ("scan.jpg", "image/jpeg"),
            ("scan.jpeg", "image/jpeg"),
            ("scan.png", "image/png"),
        ] {
            assert_eq!(resolve_mime_type(&binary_doc(name)), mime, "for {name}");
        }
    }

    #[test]
    fn declared_mime_wins_over_extension() {
        let doc = Document::new("mislabeled.txt", vec![1], Some("application/pdf".into()));
        assert_eq!(resolve_mime_type(&doc), "application/pdf");
    }

    #[test]
    fn blank_declared_mime_falls_through_to_table() {
        let doc = Document::new("contract.pdf", vec![1], Some("".into()));
        assert_eq!(resolve_mime_type(&doc), "application/pdf");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            resolve_mime_type(&binary_doc("dump.qorgan-export")),
            "application/octet-stream"
        );
    }

    #[test]
    fn mime_guess_covers_extensions_outside_the_table() {
        assert_eq!(resolve_mime_type(&binary_doc("notes.html")), "text/html");
    }

    // ── Content extraction ──────────────────────────────────────────

    fn fixture_docx(text: &str) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
            .build()
            .pack(&mut buf)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn docx_yields_inline_text() {
        let doc = Document::new("agreement.docx", fixture_docx("Penalty clause 5.2"), None);
        match extract_content(&doc) {
            DocumentContent::Text(text) => assert!(text.contains("Penalty clause 5.2")),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn docx_detected_by_declared_mime_without_extension() {
        let doc = Document::new(
            "agreement",
            fixture_docx("Term of the lease"),
            Some(DOCX_MIME.into()),
        );
        assert!(matches!(extract_content(&doc), DocumentContent::Text(_)));
    }

    #[test]
    fn corrupt_docx_falls_back_to_binary() {
        let doc = Document::new("broken.docx", b"definitely not a docx".to_vec(), None);
        match extract_content(&doc) {
            DocumentContent::Binary { mime_type, .. } => assert_eq!(mime_type, DOCX_MIME),
            other => panic!("expected binary fallback, got {other:?}"),
        }
    }

    #[test]
    fn pdf_takes_the_binary_path() {
        let doc = Document::new("contract.pdf", b"%PDF-1.4 fake".to_vec(), None);
        match extract_content(&doc) {
            DocumentContent::Binary { mime_type, .. } => {
                assert_eq!(mime_type, "application/pdf");
            }
            other => panic!("expected binary content, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_file_is_not_locally_extracted() {
        // Only the word-processing container gets local extraction; text
        // files still travel as binary and the backend reads them itself.
        let doc = Document::new("notes.txt", b"plain notes".to_vec(), None);
        assert!(matches!(
            extract_content(&doc),
            DocumentContent::Binary { .. }
        ));
    }

    #[test]
    fn binary_payload_round_trips_through_base64() {
        let original: Vec<u8> = (0u8..=255).collect();
        let doc = Document::new("blob.bin", original.clone(), None);
        match extract_content(&doc) {
            DocumentContent::Binary { data, .. } => {
                let decoded = base64::engine::general_purpose::STANDARD
                    .decode(data)
                    .unwrap();
                assert_eq!(decoded, original);
            }
            other => panic!("expected binary content, got {other:?}"),
        }
    }
}
