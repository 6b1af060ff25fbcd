use crate::scoring::analyzers::{
    ResumeDocument, Section, SectionAnalyzer, SectionDetails, SectionOutcome,
};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{contains_any, count_matches, count_occurrences, percentage};
use crate::scoring::tables::{
    ACHIEVEMENT_MARKERS, PROJECT_INDICATORS, VAGUE_PHRASES, VOLUNTEER_KEYWORDS, VOLUNTEER_MARKER,
};

/// Measurable outcomes per achievement marker, in percent, that must be exceeded.
const MEASURABLE_THRESHOLD: f64 = 30.0;
/// Vague phrases per 100 words must stay below this.
const MAX_VAGUE_DENSITY: f64 = 5.0;

pub struct ProjectsAnalyzer;

impl SectionAnalyzer for ProjectsAnalyzer {
    fn section(&self) -> Section {
        Section::ProjectsAchievements
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let lower = doc.lower.as_str();

        let has_projects = contains_any(lower, PROJECT_INDICATORS);
        let has_technology = doc.tables.technical_skills().any(|skill| lower.contains(skill));

        let measurable = count_matches(&doc.tables.patterns.project_measurable, doc.text);
        let achievements = count_occurrences(lower, ACHIEVEMENT_MARKERS);
        let measurable_pct = percentage(measurable, achievements);

        let volunteer_ok =
            contains_any(lower, VOLUNTEER_KEYWORDS) || !lower.contains(VOLUNTEER_MARKER);
        let vague_ok = doc.word_count == 0
            || percentage(count_occurrences(lower, VAGUE_PHRASES), doc.word_count)
                < MAX_VAGUE_DENSITY;

        let mut checklist = Checklist::new();
        checklist
            .check_or("projects_described", has_projects, || {
                "Add a Projects or Achievements section to showcase your work".to_string()
            })
            .check_or("technology_skills_listed", has_technology, || {
                "Include technologies and skills used in your projects".to_string()
            })
            .check_or(
                "measurable_achievements",
                measurable_pct > MEASURABLE_THRESHOLD,
                || {
                    "Quantify project outcomes (e.g., 'trained 50 students', 'increased efficiency by 25%')"
                        .to_string()
                },
            )
            .check_or("relevant_volunteer", volunteer_ok, || {
                "Describe the community impact of your volunteer work".to_string()
            })
            .check_or("no_vague_descriptions", vague_ok, || {
                "Replace vague descriptions with specific, action-oriented language".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish()).with_details(
            SectionDetails::Projects {
                measurable_percentage: measurable_pct,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::analyzers::test_support::run;

    #[test]
    fn test_quantified_project_scores_full() {
        let text = "Projects\nPayment reconciliation project in Python used by 200 users";
        let outcome = run(&ProjectsAnalyzer, text);
        assert_eq!(outcome.result.score, 100.0, "{:?}", outcome.result.items);
        // one measurable outcome against "projects" and "project"
        assert_eq!(
            outcome.details,
            Some(SectionDetails::Projects {
                measurable_percentage: 50.0
            })
        );
    }

    #[test]
    fn test_no_markers_means_zero_measurable_percentage() {
        let outcome = run(&ProjectsAnalyzer, "Shipped 40% faster builds");
        assert_eq!(outcome.result.passed("projects_described"), Some(false));
        assert_eq!(outcome.result.passed("measurable_achievements"), Some(false));
    }

    #[test]
    fn test_vague_language_is_flagged() {
        let outcome = run(&ProjectsAnalyzer, "Helped with things and worked on stuff");
        assert_eq!(outcome.result.passed("no_vague_descriptions"), Some(false));
        assert_eq!(
            outcome.result.recommendations.last().map(String::as_str),
            Some("Replace vague descriptions with specific, action-oriented language")
        );
    }

    #[test]
    fn test_volunteer_mention_is_relevant() {
        let outcome = run(&ProjectsAnalyzer, "Volunteer tutor at the library");
        assert_eq!(outcome.result.passed("relevant_volunteer"), Some(true));
        assert_eq!(outcome.result.passed("projects_described"), Some(true));
    }
}
