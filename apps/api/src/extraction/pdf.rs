use std::collections::BTreeSet;

use lopdf::{Dictionary, Document, Object};

use crate::extraction::{non_ats_fonts, ExtractedDocument, ExtractionError};
use crate::models::analysis::FormattingInfo;

const FONT_ISSUE: &str = "Non-ATS friendly fonts detected";
const IMAGE_ISSUE: &str = "Contains images which may not be ATS-friendly";
const TABLE_ISSUE: &str = "Contains tables which may cause parsing issues";

pub fn extract(bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    let formatting = PageResources::read(bytes)?.formatting(&text);
    Ok(ExtractedDocument { text, formatting })
}

/// Fonts and images referenced from the `/Resources` of every page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageResources {
    pub fonts: BTreeSet<String>,
    pub has_images: bool,
}

impl PageResources {
    pub fn read(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        let mut found = Self::default();
        for page_id in doc.get_pages().into_values() {
            let (direct, inherited) = doc
                .get_page_resources(page_id)
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
            let dictionaries = direct.into_iter().chain(
                inherited
                    .into_iter()
                    .filter_map(|id| doc.get_dictionary(id).ok()),
            );
            for resources in dictionaries {
                for font in entries(&doc, resources, b"Font") {
                    let base_font = font
                        .as_dict()
                        .and_then(|dict| dict.get(b"BaseFont"))
                        .and_then(Object::as_name);
                    if let Ok(name) = base_font {
                        found.fonts.insert(font_family(name));
                    }
                }
                found.has_images |= entries(&doc, resources, b"XObject")
                    .into_iter()
                    .any(is_image);
            }
        }
        Ok(found)
    }

    /// Layout facts for the extracted `text`. Pipes and tabs usually come from table cells.
    pub fn formatting(self, text: &str) -> FormattingInfo {
        let has_tables = text.contains('\t') || text.contains('|');

        let mut formatting_issues = Vec::new();
        if let Some(fonts) = non_ats_fonts(&self.fonts) {
            formatting_issues.push(format!("{FONT_ISSUE}: {fonts}"));
        }
        if self.has_images {
            formatting_issues.push(IMAGE_ISSUE.to_string());
        }
        if has_tables {
            formatting_issues.push(TABLE_ISSUE.to_string());
        }

        FormattingInfo {
            has_images: self.has_images,
            has_tables,
            fonts_used: self.fonts,
            formatting_issues,
        }
    }
}

/// Objects named in one resource category (`/Font`, `/XObject`), references resolved.
fn entries<'a>(doc: &'a Document, resources: &'a Dictionary, category: &[u8]) -> Vec<&'a Object> {
    resources
        .get(category)
        .map(|object| resolve(doc, object))
        .and_then(Object::as_dict)
        .map(|named| named.iter().map(|(_, object)| resolve(doc, object)).collect())
        .unwrap_or_default()
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        other => other,
    }
}

fn is_image(xobject: &Object) -> bool {
    xobject
        .as_stream()
        .and_then(|stream| stream.dict.get(b"Subtype"))
        .and_then(Object::as_name)
        .is_ok_and(|subtype| subtype == b"Image")
}

/// Lowercased family name without the six-letter subset tag (`ABCDEF+Calibri` -> `calibri`).
fn font_family(base_font: &[u8]) -> String {
    let name = String::from_utf8_lossy(base_font);
    let family = match name.split_once('+') {
        Some((tag, rest)) if tag.len() == 6 && tag.bytes().all(|b| b.is_ascii_uppercase()) => rest,
        _ => name.as_ref(),
    };
    family.to_lowercase()
}
