//! Section analyzers: nine independent checklists over the same résumé text.
//!
//! Each analyzer implements `SectionAnalyzer`; the engine runs them in the fixed
//! `Section::ALL` order. No analyzer reads another analyzer's output.

pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod headline;
pub mod keywords;
pub mod projects;
pub mod skills;

use serde::Serialize;

use crate::models::analysis::{FormattingInfo, JobContext};
use crate::scoring::checklist::ChecklistResult;
use crate::scoring::detectors::word_count;
use crate::scoring::tables::ScoringTables;

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    ContactInformation,
    HeadlineSummary,
    SkillsSection,
    WorkExperience,
    Education,
    Certifications,
    ProjectsAchievements,
    KeywordsRelevance,
    FormattingReadability,
}

impl Section {
    /// Analysis order; also the order recommendations are merged in.
    pub const ALL: [Section; 9] = [
        Section::ContactInformation,
        Section::HeadlineSummary,
        Section::SkillsSection,
        Section::WorkExperience,
        Section::Education,
        Section::Certifications,
        Section::ProjectsAchievements,
        Section::KeywordsRelevance,
        Section::FormattingReadability,
    ];

    /// Key used in `detailed_analysis`.
    pub fn key(self) -> &'static str {
        match self {
            Section::ContactInformation => "contact_information",
            Section::HeadlineSummary => "headline_summary",
            Section::SkillsSection => "skills_section",
            Section::WorkExperience => "work_experience",
            Section::Education => "education",
            Section::Certifications => "certifications",
            Section::ProjectsAchievements => "projects_achievements",
            Section::KeywordsRelevance => "keywords_relevance",
            Section::FormattingReadability => "formatting_readability",
        }
    }

    /// Human-readable title, e.g. "Contact Information".
    pub fn title(self) -> &'static str {
        match self {
            Section::ContactInformation => "Contact Information",
            Section::HeadlineSummary => "Headline Summary",
            Section::SkillsSection => "Skills Section",
            Section::WorkExperience => "Work Experience",
            Section::Education => "Education",
            Section::Certifications => "Certifications",
            Section::ProjectsAchievements => "Projects Achievements",
            Section::KeywordsRelevance => "Keywords Relevance",
            Section::FormattingReadability => "Formatting Readability",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input / output
// ────────────────────────────────────────────────────────────────────────────

/// Everything an analyzer may read. Built once per analysis call.
pub struct ResumeDocument<'a> {
    pub text: &'a str,
    pub lower: String,
    pub word_count: usize,
    pub job: &'a JobContext,
    pub formatting: &'a FormattingInfo,
    pub tables: &'a ScoringTables,
}

impl<'a> ResumeDocument<'a> {
    pub fn new(
        text: &'a str,
        job: &'a JobContext,
        formatting: &'a FormattingInfo,
        tables: &'a ScoringTables,
    ) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            word_count: word_count(text),
            job,
            formatting,
            tables,
        }
    }
}

/// Skills grouped the way the skills dictionary is split.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsFound {
    pub technical: Vec<&'static str>,
    pub soft: Vec<&'static str>,
}

impl SkillsFound {
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len()
    }
}

/// Section-specific figures reported next to the checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionDetails {
    Skills {
        skills_found: SkillsFound,
        job_match_percentage: f64,
    },
    Experience {
        quantifiable_impact_percentage: f64,
    },
    Certifications {
        certifications_found: Vec<&'static str>,
    },
    Projects {
        measurable_percentage: f64,
    },
    Keywords {
        keyword_match_percentage: f64,
        missing_keywords: Vec<String>,
    },
}

/// What one analyzer produces. Serializes as the checklist result with any details inlined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionOutcome {
    #[serde(skip)]
    pub section: Section,
    #[serde(flatten)]
    pub result: ChecklistResult,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub details: Option<SectionDetails>,
}

impl SectionOutcome {
    pub fn new(section: Section, result: ChecklistResult) -> Self {
        Self {
            section,
            result,
            details: None,
        }
    }

    pub fn with_details(mut self, details: SectionDetails) -> Self {
        self.details = Some(details);
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// A checklist analyzer for one résumé section.
///
/// Implementations are pure: the same document always yields the same outcome, and
/// no implementation may panic on any text.
pub trait SectionAnalyzer: Send + Sync {
    fn section(&self) -> Section;

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome;
}

/// The nine analyzers in `Section::ALL` order.
pub fn default_analyzers() -> Vec<Box<dyn SectionAnalyzer>> {
    vec![
        Box::new(contact::ContactAnalyzer),
        Box::new(headline::HeadlineAnalyzer),
        Box::new(skills::SkillsAnalyzer),
        Box::new(experience::ExperienceAnalyzer),
        Box::new(education::EducationAnalyzer),
        Box::new(certifications::CertificationsAnalyzer),
        Box::new(projects::ProjectsAnalyzer),
        Box::new(keywords::KeywordsAnalyzer),
        Box::new(formatting::FormattingAnalyzer),
    ]
}
