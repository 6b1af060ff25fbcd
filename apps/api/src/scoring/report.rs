//! The externally visible analysis report.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::scoring::aggregator::{ComponentScores, SummaryTier};
use crate::scoring::analyzers::{Section, SectionDetails, SectionOutcome, SkillsFound};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub overall_ats_score: u8,
    pub keyword_match: u8,
    pub skills_match: u8,
    pub formatting_readability: u8,
    pub tier: SummaryTier,
    pub summary_statement: &'static str,
}

/// Component scores truncated to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub overall_ats_score: u8,
    pub keyword_match: u8,
    pub skills_match: u8,
    pub formatting_readability: u8,
    pub experience_relevance: u8,
    pub contact_completeness: u8,
    pub education_certifications: u8,
}

impl Scorecard {
    pub fn from_components(scores: &ComponentScores) -> Self {
        Self {
            overall_ats_score: scores.overall_score(),
            keyword_match: truncate(scores.keyword_match),
            skills_match: truncate(scores.skills_match),
            formatting_readability: truncate(scores.formatting_readability),
            experience_relevance: truncate(scores.experience_relevance),
            contact_completeness: truncate(scores.contact_completeness),
            education_certifications: truncate(scores.education_certifications),
        }
    }

    pub fn executive_summary(&self) -> ExecutiveSummary {
        let tier = SummaryTier::from_score(self.overall_ats_score);
        ExecutiveSummary {
            overall_ats_score: self.overall_ats_score,
            keyword_match: self.keyword_match,
            skills_match: self.skills_match,
            formatting_readability: self.formatting_readability,
            tier,
            summary_statement: tier.statement(),
        }
    }

    /// Chart slices, always in the same order and colors.
    pub fn visualization(&self) -> Vec<VisualizationSlice> {
        vec![
            VisualizationSlice::new("Keyword Match", self.keyword_match, "#3B82F6"),
            VisualizationSlice::new("Skills Match", self.skills_match, "#10B981"),
            VisualizationSlice::new("Formatting", self.formatting_readability, "#F59E0B"),
            VisualizationSlice::new("Experience", self.experience_relevance, "#EF4444"),
            VisualizationSlice::new(
                "Contact & Education",
                self.education_certifications,
                "#8B5CF6",
            ),
        ]
    }
}

fn truncate(score: f64) -> u8 {
    score.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualizationSlice {
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

impl VisualizationSlice {
    fn new(name: &'static str, value: u8, color: &'static str) -> Self {
        Self { name, value, color }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub executive_summary: ExecutiveSummary,
    /// One entry per section, serialized as a map in analysis order.
    #[serde(serialize_with = "serialize_sections")]
    pub detailed_analysis: Vec<SectionOutcome>,
    pub scorecard: Scorecard,
    pub visualization: Vec<VisualizationSlice>,
    pub recommendations: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl AnalysisReport {
    pub fn section(&self, section: Section) -> Option<&SectionOutcome> {
        self.detailed_analysis
            .iter()
            .find(|outcome| outcome.section == section)
    }

    /// Skills reported by the skills analyzer, if it ran.
    pub fn skills_found(&self) -> Option<&SkillsFound> {
        match self.section(Section::SkillsSection)?.details.as_ref()? {
            SectionDetails::Skills { skills_found, .. } => Some(skills_found),
            _ => None,
        }
    }
}

fn serialize_sections<S: Serializer>(
    sections: &[SectionOutcome],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for outcome in sections {
        map.serialize_entry(outcome.section.key(), outcome)?;
    }
    map.end()
}
