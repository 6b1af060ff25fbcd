//! Text extraction from uploaded résumé files.
//!
//! PDF text goes through `pdf-extract` and its page resources through `lopdf`. DOCX is read
//! straight from the package XML. Plain text must be valid UTF-8 and carries no layout facts.

pub mod docx;
pub mod pdf;
pub mod validation;

use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::analysis::FormattingInfo;
use crate::scoring::tables::ATS_FONTS;

/// Non-ATS fonts named in a formatting issue.
const FONTS_NAMED: usize = 3;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No file provided")]
    MissingFile,

    #[error("Unsupported file type '{0}'. Please upload PDF, DOCX, or TXT files.")]
    UnsupportedType(String),

    #[error("File too large. Maximum size is {max_mb}MB.")]
    TooLarge { max_mb: usize },

    #[error("File appears to be empty or too small.")]
    TooSmall,

    #[error("Failed to parse PDF: {0}")]
    Pdf(String),

    #[error("Failed to parse DOCX: {0}")]
    Docx(String),

    #[error("Text file is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("The uploaded document does not appear to be a resume. Please upload a valid resume file containing work experience, education, and skills information.")]
    NotAResume,
}

/// Upload formats that can be turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Picks the kind from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::PlainText),
            _ => Err(ExtractionError::UnsupportedType(format!(".{extension}"))),
        }
    }
}

/// Text pulled out of an upload, with the layout facts observed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub formatting: FormattingInfo,
}

/// Extracts text from raw file bytes. CPU-bound; call from a blocking task.
pub fn extract(kind: DocumentKind, bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let ExtractedDocument { text, formatting } = match kind {
        DocumentKind::Pdf => pdf::extract(bytes)?,
        DocumentKind::Docx => docx::extract(bytes)?,
        DocumentKind::PlainText => ExtractedDocument {
            text: String::from_utf8(bytes.to_vec())?,
            formatting: FormattingInfo::default(),
        },
    };
    let text = text.trim().to_string();
    debug!(
        ?kind,
        chars = text.len(),
        fonts = formatting.fonts_used.len(),
        has_images = formatting.has_images,
        has_tables = formatting.has_tables,
        "extracted document text"
    );
    Ok(ExtractedDocument { text, formatting })
}

/// Up to three fonts, in name order, that contain none of the ATS-safe family names.
fn non_ats_fonts(fonts: &BTreeSet<String>) -> Option<String> {
    let flagged: Vec<&str> = fonts
        .iter()
        .map(String::as_str)
        .filter(|font| !ATS_FONTS.iter().any(|ats_font| font.contains(ats_font)))
        .take(FONTS_NAMED)
        .collect();
    (!flagged.is_empty()).then(|| flagged.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_file_name("cv.PDF").unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_file_name("cv.docx").unwrap(), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::from_file_name("notes/resume.txt").unwrap(),
            DocumentKind::PlainText
        );
        assert!(matches!(
            DocumentKind::from_file_name("resume.doc"),
            Err(ExtractionError::UnsupportedType(ext)) if ext == ".doc"
        ));
        assert!(DocumentKind::from_file_name("resume").is_err());
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let doc = extract(DocumentKind::PlainText, b"\n  Jane Doe\nEngineer  \n").unwrap();
        assert_eq!(doc.text, "Jane Doe\nEngineer");
        assert!(!doc.formatting.has_tables);
    }

    #[test]
    fn test_plain_text_reports_no_layout_facts() {
        let doc = extract(
            DocumentKind::PlainText,
            b"Jane Doe | jane@example.com | Austin, TX\nSkill\tLevel",
        )
        .unwrap();
        assert_eq!(doc.formatting, FormattingInfo::default());
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = extract(DocumentKind::PlainText, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidUtf8(_)));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let result = std::panic::catch_unwind(|| extract(DocumentKind::Pdf, b"not a pdf at all"));
        // pdf-extract reports malformed input either as an error or by panicking
        assert!(!matches!(result, Ok(Ok(_))));
    }

    #[test]
    fn test_non_ats_fonts_named() {
        let fonts: BTreeSet<String> =
            ["calibri-bold", "comic sans ms", "papyrus", "wingdings", "zapfino"]
                .iter()
                .map(|f| f.to_string())
                .collect();
        assert_eq!(
            non_ats_fonts(&fonts).as_deref(),
            Some("comic sans ms, papyrus, wingdings")
        );
        let safe: BTreeSet<String> = ["arial".to_string()].into();
        assert_eq!(non_ats_fonts(&safe), None);
    }
}
