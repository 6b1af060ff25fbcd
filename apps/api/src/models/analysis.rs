use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Layout facts reported by the text extractor. Every field defaults to empty/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingInfo {
    pub has_images: bool,
    pub has_tables: bool,
    pub fonts_used: BTreeSet<String>,
    pub formatting_issues: Vec<String>,
}

/// Optional job description and title the résumé is scored against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobContext {
    description: Option<String>,
    title: Option<String>,
}

impl JobContext {
    pub fn new(description: Option<String>, title: Option<String>) -> Self {
        Self { description, title }
    }

    /// The job description, unless absent or blank.
    pub fn description(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// The job title, unless absent or blank.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One scoring request: the résumé text plus whatever context came with it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    pub raw_text: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub formatting_info: FormattingInfo,
}

impl AnalysisRequest {
    pub fn job_context(&self) -> JobContext {
        JobContext::new(self.job_description.clone(), self.job_title.clone())
    }
}
