use crate::scoring::analyzers::{ResumeDocument, Section, SectionAnalyzer, SectionOutcome};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{any_match, contains_any, find_years};
use crate::scoring::tables::{COURSEWORK_INDICATORS, ENTRY_LEVEL_MARKER, INSTITUTION_INDICATORS};

pub struct EducationAnalyzer;

impl SectionAnalyzer for EducationAnalyzer {
    fn section(&self) -> Section {
        Section::Education
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let lower = doc.lower.as_str();
        let patterns = &doc.tables.patterns;

        let has_institution = contains_any(lower, INSTITUTION_INDICATORS);
        let has_degree = any_match(&patterns.degree, lower);
        let has_dates = !find_years(doc.tables, doc.text).is_empty();
        // Coursework only matters for entry-level candidates.
        let coursework_ok =
            contains_any(lower, COURSEWORK_INDICATORS) || !lower.contains(ENTRY_LEVEL_MARKER);
        // A GPA counts against the résumé only when it is mentioned and below 3.5.
        let gpa_ok = patterns.strong_gpa.is_match(lower) || !lower.contains("gpa");

        let mut checklist = Checklist::new();
        checklist
            .check_or("institution_name", has_institution, || {
                "Include full institution names".to_string()
            })
            .check_or("degree_name", has_degree, || {
                "Specify degree type (B.A., B.Sc., MBA, etc.)".to_string()
            })
            .check_or("graduation_dates", has_dates, || {
                "Add graduation dates or 'Expected' for current students".to_string()
            })
            .check_or("relevant_coursework", coursework_ok, || {
                "Include relevant coursework for entry-level positions".to_string()
            })
            .check_or("gpa_included", gpa_ok, || {
                "List GPA only when it is 3.5 or higher".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::analyzers::test_support::run;

    #[test]
    fn test_complete_education_scores_full() {
        let text = "Education\nBachelor of Science, State University, 2014\nCoursework: compilers";
        let outcome = run(&EducationAnalyzer, text);
        assert_eq!(outcome.result.score, 100.0, "{:?}", outcome.result.items);
    }

    #[test]
    fn test_abbreviated_degree_is_recognised() {
        let outcome = run(&EducationAnalyzer, "B.S. Computer Science");
        assert_eq!(outcome.result.passed("degree_name"), Some(true));
        let outcome = run(&EducationAnalyzer, "MBA, 2019");
        assert_eq!(outcome.result.passed("degree_name"), Some(true));
    }

    #[test]
    fn test_coursework_required_only_for_entry_level() {
        let outcome = run(&EducationAnalyzer, "State University 2022");
        assert_eq!(outcome.result.passed("relevant_coursework"), Some(true));

        let outcome = run(&EducationAnalyzer, "Seeking an entry level role\nState University 2022");
        assert_eq!(outcome.result.passed("relevant_coursework"), Some(false));
        assert!(outcome
            .result
            .recommendations
            .contains(&"Include relevant coursework for entry-level positions".to_string()));
    }

    #[test]
    fn test_gpa_only_penalised_when_weak() {
        let outcome = run(&EducationAnalyzer, "State University");
        assert_eq!(outcome.result.passed("gpa_included"), Some(true));
        let outcome = run(&EducationAnalyzer, "State University, GPA: 3.8");
        assert_eq!(outcome.result.passed("gpa_included"), Some(true));
        let outcome = run(&EducationAnalyzer, "State University, GPA: 3.1");
        assert_eq!(outcome.result.passed("gpa_included"), Some(false));
    }

    #[test]
    fn test_no_education_recommends_each_missing_item() {
        let outcome = run(&EducationAnalyzer, "Nothing here");
        assert_eq!(outcome.result.score, 40.0);
        assert_eq!(
            outcome.result.recommendations,
            vec![
                "Include full institution names",
                "Specify degree type (B.A., B.Sc., MBA, etc.)",
                "Add graduation dates or 'Expected' for current students",
            ]
        );
    }
}
