use crate::scoring::analyzers::{ResumeDocument, Section, SectionAnalyzer, SectionOutcome};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{any_match, contains_any, headline_candidates, summary_line_count};
use crate::scoring::tables::{GENERIC_PHRASES, HEADLINE_ROLE_KEYWORDS};

/// Acceptable number of non-blank summary lines.
const SUMMARY_LINES: std::ops::RangeInclusive<usize> = 2..=5;

pub struct HeadlineAnalyzer;

impl SectionAnalyzer for HeadlineAnalyzer {
    fn section(&self) -> Section {
        Section::HeadlineSummary
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let lower = doc.lower.as_str();

        let has_headline = !headline_candidates(doc.text).is_empty();
        let summary_ok = summary_line_count(lower).is_some_and(|n| SUMMARY_LINES.contains(&n));
        let has_role_keywords = contains_any(lower, HEADLINE_ROLE_KEYWORDS);
        let has_measurable = any_match(&doc.tables.patterns.headline_measurable, doc.text);
        let has_generic = contains_any(lower, GENERIC_PHRASES);

        let mut checklist = Checklist::new();
        checklist
            .check_or("clear_headline", has_headline, || {
                "Add a clear headline with your job title or specialization".to_string()
            })
            .check_or("summary_length", summary_ok, || {
                "Include a 3-4 line professional summary with key qualifications".to_string()
            })
            .check_or("role_keywords", has_role_keywords, || {
                "Include role-specific keywords in your summary".to_string()
            })
            .check_or("measurable_language", has_measurable, || {
                "Add quantifiable achievements (e.g., 'Increased efficiency by 20%')".to_string()
            })
            .check_or("avoid_generic", !has_generic, || {
                "Remove generic phrases and replace with specific accomplishments".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish())
    }
}
