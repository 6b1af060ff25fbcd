//! Score aggregation: six weighted components, the overall score and its summary tier.

use serde::Serialize;

use crate::scoring::analyzers::{Section, SectionOutcome};

/// A weighted scoring component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    KeywordMatch,
    SkillsMatch,
    FormattingReadability,
    ExperienceRelevance,
    ContactCompleteness,
    EducationCertifications,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::KeywordMatch,
        Component::SkillsMatch,
        Component::FormattingReadability,
        Component::ExperienceRelevance,
        Component::ContactCompleteness,
        Component::EducationCertifications,
    ];

    /// Weight as an integer percentage. The six weights sum to exactly 100.
    pub fn weight_pct(self) -> u32 {
        match self {
            Component::KeywordMatch => 25,
            Component::SkillsMatch => 20,
            Component::FormattingReadability => 20,
            Component::ExperienceRelevance => 15,
            Component::ContactCompleteness => 10,
            Component::EducationCertifications => 10,
        }
    }
}

/// Component scores in [0, 100], unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentScores {
    pub keyword_match: f64,
    pub skills_match: f64,
    pub formatting_readability: f64,
    pub experience_relevance: f64,
    pub contact_completeness: f64,
    pub education_certifications: f64,
}

impl ComponentScores {
    /// Maps section outcomes onto components. A missing section scores 0.
    pub fn from_outcomes(outcomes: &[SectionOutcome]) -> Self {
        let score = |section: Section| {
            outcomes
                .iter()
                .find(|outcome| outcome.section == section)
                .map_or(0.0, |outcome| outcome.result.score)
        };
        Self {
            keyword_match: score(Section::KeywordsRelevance),
            skills_match: score(Section::SkillsSection),
            formatting_readability: score(Section::FormattingReadability),
            experience_relevance: score(Section::WorkExperience),
            contact_completeness: score(Section::ContactInformation),
            education_certifications: (score(Section::Education) + score(Section::Certifications))
                / 2.0,
        }
    }

    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::KeywordMatch => self.keyword_match,
            Component::SkillsMatch => self.skills_match,
            Component::FormattingReadability => self.formatting_readability,
            Component::ExperienceRelevance => self.experience_relevance,
            Component::ContactCompleteness => self.contact_completeness,
            Component::EducationCertifications => self.education_certifications,
        }
    }

    /// `floor(Σ score·weight)`, clamped to [0, 100].
    pub fn overall_score(&self) -> u8 {
        let weighted: f64 = Component::ALL
            .iter()
            .map(|&component| self.get(component) * f64::from(component.weight_pct()))
            .sum();
        // The epsilon absorbs float noise such as 69.99999999999999 before truncation.
        let overall = (weighted / 100.0 + 1e-9).floor();
        overall.clamp(0.0, 100.0) as u8
    }
}

/// Executive-summary tier for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryTier {
    Excellent,
    Good,
    Moderate,
    NeedsWork,
}

impl SummaryTier {
    pub fn from_score(overall: u8) -> Self {
        match overall {
            80.. => SummaryTier::Excellent,
            65..=79 => SummaryTier::Good,
            50..=64 => SummaryTier::Moderate,
            _ => SummaryTier::NeedsWork,
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            SummaryTier::Excellent => {
                "Excellent ATS optimization with strong keyword alignment and professional formatting. Minor improvements could further enhance visibility."
            }
            SummaryTier::Good => {
                "Good ATS compatibility with solid structure. Focus on keyword optimization and quantified achievements for better results."
            }
            SummaryTier::Moderate => {
                "Moderate ATS readiness requiring improvements in formatting, keywords, and content structure for optimal performance."
            }
            SummaryTier::NeedsWork => {
                "Significant ATS optimization needed. Address formatting issues, add missing keywords, and improve overall structure."
            }
        }
    }
}
