use crate::scoring::analyzers::{ResumeDocument, Section, SectionAnalyzer, SectionOutcome};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{has_bullet_markers, non_blank_line_ratio, uses_ats_font};
use crate::scoring::readability::{reading_ease_or_neutral, MIN_READING_EASE};
use crate::scoring::tables::STANDARD_HEADINGS;

const MIN_STANDARD_HEADINGS: usize = 3;
/// Share of non-blank lines that must be exceeded.
const MIN_LINE_DENSITY: f64 = 0.5;

pub struct FormattingAnalyzer;

impl SectionAnalyzer for FormattingAnalyzer {
    fn section(&self) -> Section {
        Section::FormattingReadability
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let info = doc.formatting;

        let headings = STANDARD_HEADINGS
            .iter()
            .filter(|heading| doc.lower.contains(*heading))
            .count();
        let fonts_ok = uses_ats_font(&info.fonts_used).unwrap_or(true);
        let reading_ease = reading_ease_or_neutral(doc.text);

        let mut checklist = Checklist::new();
        for issue in &info.formatting_issues {
            checklist.note(issue.as_str());
        }
        checklist
            // Text reached the analyzer, so the source format was parseable.
            .check("ats_safe_format", true)
            .check_or("no_images", !info.has_images, || {
                "Remove images and graphics for better ATS compatibility".to_string()
            })
            .check_or("no_tables", !info.has_tables, || {
                "Replace tables with simple text formatting".to_string()
            })
            .check_or("standard_headings", headings >= MIN_STANDARD_HEADINGS, || {
                "Use standard section headings (Work Experience, Education, Skills)".to_string()
            })
            .check_or("ats_friendly_fonts", fonts_ok, || {
                "Switch to an ATS-friendly font such as Arial, Calibri or Helvetica".to_string()
            })
            // Font sizes are not recoverable from extracted text.
            .check("appropriate_font_size", true)
            .check_or(
                "consistent_spacing",
                non_blank_line_ratio(doc.text) > MIN_LINE_DENSITY,
                || "Remove excess blank lines so spacing stays consistent".to_string(),
            )
            .check_or("bullet_points_used", has_bullet_markers(doc.tables, doc.text), || {
                "Use bullet points instead of paragraphs for better readability".to_string()
            })
            .check_or("good_readability", reading_ease > MIN_READING_EASE, || {
                "Shorten sentences and prefer plain words to improve readability".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{FormattingInfo, JobContext};
    use crate::scoring::analyzers::test_support::{run, run_with};

    const TIDY: &str = r#"Summary
Backend engineer who builds payment tools.
Experience
• Built the billing service
• Ran the on-call rota
Education
State University
Skills
Python and Go"#;

    #[test]
    fn test_tidy_text_scores_full() {
        let outcome = run(&FormattingAnalyzer, TIDY);
        assert_eq!(outcome.result.score, 100.0, "{:?}", outcome.result.items);
        assert!(outcome.result.recommendations.is_empty());
    }

    #[test]
    fn test_extractor_issues_come_first() {
        let formatting = FormattingInfo {
            has_images: true,
            formatting_issues: vec!["Text found in page header".to_string()],
            ..FormattingInfo::default()
        };
        let outcome = run_with(&FormattingAnalyzer, TIDY, &JobContext::default(), &formatting);
        assert_eq!(outcome.result.passed("no_images"), Some(false));
        assert_eq!(
            outcome.result.recommendations,
            vec![
                "Text found in page header",
                "Remove images and graphics for better ATS compatibility",
            ]
        );
    }

    #[test]
    fn test_fonts_checked_only_when_reported() {
        let formatting = FormattingInfo {
            fonts_used: ["ComicSans".to_string()].into(),
            ..FormattingInfo::default()
        };
        let outcome = run_with(&FormattingAnalyzer, TIDY, &JobContext::default(), &formatting);
        assert_eq!(outcome.result.passed("ats_friendly_fonts"), Some(false));

        let formatting = FormattingInfo {
            fonts_used: ["ComicSans".to_string(), "Arial-BoldMT".to_string()].into(),
            ..FormattingInfo::default()
        };
        let outcome = run_with(&FormattingAnalyzer, TIDY, &JobContext::default(), &formatting);
        assert_eq!(outcome.result.passed("ats_friendly_fonts"), Some(true));
    }

    #[test]
    fn test_sparse_unstructured_text() {
        let outcome = run(&FormattingAnalyzer, "one\n\n\n\ntwo");
        assert_eq!(outcome.result.passed("standard_headings"), Some(false));
        assert_eq!(outcome.result.passed("consistent_spacing"), Some(false));
        assert_eq!(outcome.result.passed("bullet_points_used"), Some(false));
        assert_eq!(outcome.result.items.len(), 9);
    }
}
