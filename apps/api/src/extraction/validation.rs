use crate::extraction::{DocumentKind, ExtractionError};

/// Uploads smaller than this cannot hold a résumé.
pub const MIN_UPLOAD_BYTES: usize = 100;

const RESUME_TERMS: &[&str] = &[
    "experience", "education", "skills", "work", "employment", "resume", "cv",
    "curriculum vitae", "objective", "summary", "achievements", "projects", "certifications",
    "qualifications", "professional", "career", "position", "responsibilities",
];

const NON_RESUME_TERMS: &[&str] = &[
    "invoice", "bill", "payment", "amount due", "total amount", "due date", "billing",
    "account number", "transaction", "receipt", "purchase", "order", "refund", "tax",
    "electricity", "utility", "statement", "balance", "charges", "fee",
];

const MIN_RESUME_TERMS: usize = 3;
const MIN_RESUME_WORDS: usize = 100;

/// Checks name, size and type of an upload before any bytes are parsed.
pub fn validate_upload(
    file_name: Option<&str>,
    size: usize,
    max_bytes: usize,
) -> Result<DocumentKind, ExtractionError> {
    let file_name = file_name
        .filter(|name| !name.trim().is_empty())
        .ok_or(ExtractionError::MissingFile)?;
    let kind = DocumentKind::from_file_name(file_name)?;

    if size > max_bytes {
        return Err(ExtractionError::TooLarge {
            max_mb: max_bytes / (1024 * 1024),
        });
    }
    if size < MIN_UPLOAD_BYTES {
        return Err(ExtractionError::TooSmall);
    }
    Ok(kind)
}

/// Term counts used to tell résumés apart from invoices, statements and the like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSignals {
    pub resume_terms: usize,
    pub non_resume_terms: usize,
    pub words: usize,
    pub has_contact: bool,
}

impl ContentSignals {
    pub fn measure(text: &str) -> Self {
        let lower = text.to_lowercase();
        let count = |terms: &[&str]| terms.iter().filter(|term| lower.contains(*term)).count();
        Self {
            resume_terms: count(RESUME_TERMS),
            non_resume_terms: count(NON_RESUME_TERMS),
            words: text.split_whitespace().count(),
            has_contact: text.contains('@') || lower.contains("email"),
        }
    }

    pub fn looks_like_resume(&self) -> bool {
        self.resume_terms >= MIN_RESUME_TERMS
            && self.non_resume_terms < self.resume_terms
            && self.words >= MIN_RESUME_WORDS
            && self.has_contact
    }
}

/// Rejects text that does not read like a résumé.
pub fn ensure_resume_content(text: &str) -> Result<(), ExtractionError> {
    let signals = ContentSignals::measure(text);
    if signals.looks_like_resume() {
        Ok(())
    } else {
        tracing::info!(?signals, "upload rejected as non-resume content");
        Err(ExtractionError::NotAResume)
    }
}
