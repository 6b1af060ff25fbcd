//! DOCX text and layout facts, read from the OOXML package with `zip` and `quick-xml`.
//!
//! Body paragraphs come first, then the paragraphs of every table cell, one per line.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extraction::{non_ats_fonts, ExtractedDocument, ExtractionError};
use crate::models::analysis::FormattingInfo;

const DOCUMENT_PART: &str = "word/document.xml";
const MEDIA_PREFIX: &str = "word/media/";

const TABLE_ISSUE: &str = "Contains tables which may cause ATS parsing issues";
const IMAGE_ISSUE: &str = "Contains images which are not ATS-friendly";
const FONT_ISSUE: &str = "Non-ATS friendly fonts";

pub fn extract(bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let has_images = archive
        .file_names()
        .any(|name| name.starts_with(MEDIA_PREFIX));

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let body = DocumentBody::parse(&xml)?;
    let formatting = body.formatting(has_images);
    Ok(ExtractedDocument {
        text: body.text(),
        formatting,
    })
}

fn docx_error(e: impl Display) -> ExtractionError {
    ExtractionError::Docx(e.to_string())
}

/// Paragraph text and run fonts collected from `word/document.xml`.
#[derive(Debug, Default)]
struct DocumentBody {
    paragraphs: Vec<String>,
    cells: Vec<String>,
    fonts: BTreeSet<String>,
    has_tables: bool,
    table_depth: usize,
    current: String,
}

impl DocumentBody {
    fn parse(xml: &str) -> Result<Self, ExtractionError> {
        let mut reader = Reader::from_str(xml);
        let mut body = Self::default();
        let mut in_text = false;

        loop {
            match reader.read_event().map_err(docx_error)? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:tbl" => {
                        body.has_tables = true;
                        body.table_depth += 1;
                    }
                    b"w:t" => in_text = true,
                    b"w:rFonts" => body.add_font(&e)?,
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => body.current.push('\t'),
                    b"w:br" | b"w:cr" => body.current.push('\n'),
                    b"w:rFonts" => body.add_font(&e)?,
                    _ => {}
                },
                Event::Text(t) if in_text => {
                    body.current.push_str(&t.unescape().map_err(docx_error)?);
                }
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => body.end_paragraph(),
                    b"w:tbl" => body.table_depth = body.table_depth.saturating_sub(1),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(body)
    }

    fn add_font(&mut self, run_fonts: &BytesStart<'_>) -> Result<(), ExtractionError> {
        if let Some(ascii) = run_fonts.try_get_attribute("w:ascii").map_err(docx_error)? {
            let name = ascii.unescape_value().map_err(docx_error)?;
            self.fonts.insert(name.to_lowercase());
        }
        Ok(())
    }

    fn end_paragraph(&mut self) {
        let paragraph = std::mem::take(&mut self.current);
        if self.table_depth > 0 {
            self.cells.push(paragraph);
        } else {
            self.paragraphs.push(paragraph);
        }
    }

    fn text(&self) -> String {
        self.paragraphs
            .iter()
            .chain(&self.cells)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn formatting(&self, has_images: bool) -> FormattingInfo {
        let mut formatting_issues = Vec::new();
        if self.has_tables {
            formatting_issues.push(TABLE_ISSUE.to_string());
        }
        if has_images {
            formatting_issues.push(IMAGE_ISSUE.to_string());
        }
        if let Some(fonts) = non_ats_fonts(&self.fonts) {
            formatting_issues.push(format!("{FONT_ISSUE}: {fonts}"));
        }

        FormattingInfo {
            has_images,
            has_tables: self.has_tables,
            fonts_used: self.fonts.clone(),
            formatting_issues,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::package;
    use super::*;

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:r><w:rPr><w:rFonts w:ascii="Comic Sans MS" w:hAnsi="Comic Sans MS"/></w:rPr><w:t>Jane Doe</w:t></w:r>
    </w:p>
    <w:p>
      <w:r><w:rPr><w:rFonts w:ascii="Calibri"/></w:rPr><w:t>Senior</w:t><w:tab/><w:t xml:space="preserve">R&amp;D Engineer</w:t></w:r>
    </w:p>
    <w:tbl>
      <w:tr>
        <w:tc><w:p><w:r><w:t>Rust</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>Expert</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>
    <w:p><w:r><w:t>Experience</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_docx_text_tables_fonts_and_images() {
        let bytes = package(&[
            (DOCUMENT_PART, DOCUMENT_XML.as_bytes()),
            ("word/media/image1.png", b"\x89PNG".as_slice()),
        ]);
        let doc = extract(&bytes).unwrap();
        assert_eq!(doc.text, "Jane Doe\nSenior\tR&D Engineer\nExperience\nRust\nExpert");
        assert!(doc.formatting.has_tables);
        assert!(doc.formatting.has_images);
        assert_eq!(
            doc.formatting.fonts_used,
            BTreeSet::from(["calibri".to_string(), "comic sans ms".to_string()])
        );
        assert_eq!(
            doc.formatting.formatting_issues,
            vec![TABLE_ISSUE, IMAGE_ISSUE, "Non-ATS friendly fonts: comic sans ms"]
        );
    }

    #[test]
    fn test_plain_docx_has_no_issues() {
        let xml = r#"<w:document xmlns:w="x"><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p></w:body></w:document>"#;
        let doc = extract(&package(&[(DOCUMENT_PART, xml.as_bytes())])).unwrap();
        assert_eq!(doc.text, "Jane Doe");
        assert_eq!(doc.formatting, FormattingInfo::default());
    }

    #[test]
    fn test_package_without_document_part_is_rejected() {
        let bytes = package(&[("word/styles.xml", b"<w:styles/>".as_slice())]);
        assert!(matches!(extract(&bytes), Err(ExtractionError::Docx(_))));
        assert!(matches!(extract(b"not a zip"), Err(ExtractionError::Docx(_))));
    }
}
