use crate::scoring::analyzers::{
    ResumeDocument, Section, SectionAnalyzer, SectionDetails, SectionOutcome,
};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::contains_any;
use crate::scoring::tables::{CERTIFICATIONS, CERTIFICATION_ACRONYMS, CERTIFICATION_HEADINGS};

pub struct CertificationsAnalyzer;

impl SectionAnalyzer for CertificationsAnalyzer {
    fn section(&self) -> Section {
        Section::Certifications
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let lower = doc.lower.as_str();

        let found: Vec<&'static str> = CERTIFICATIONS
            .iter()
            .copied()
            .filter(|cert| lower.contains(cert))
            .collect();
        let none_found = found.is_empty();

        let acronyms_ok = none_found || acronym_repeated(doc.text, lower);
        let section_ok = none_found || contains_any(lower, CERTIFICATION_HEADINGS);

        let mut checklist = Checklist::new();
        checklist
            .check_or("industry_certifications", !none_found, || {
                suggest_certification(doc.job.description())
            })
            // Expiry dates are not reliably extractable; listed certifications are taken as current.
            .check("valid_not_expired", true)
            .check_or("acronyms_spelled_out", acronyms_ok, || {
                "Spell out certification acronyms at least once (e.g., Project Management Professional (PMP))"
                    .to_string()
            })
            .check_or("separate_section", section_ok, || {
                "Create a separate Certifications section".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish()).with_details(
            SectionDetails::Certifications {
                certifications_found: found,
            },
        )
    }
}

/// True when some known acronym appears in more than one whitespace-separated word,
/// which is taken as a sign that it is expanded somewhere.
fn acronym_repeated(text: &str, lower: &str) -> bool {
    CERTIFICATION_ACRONYMS
        .iter()
        .filter(|acronym| lower.contains(*acronym))
        .any(|acronym| {
            let upper = acronym.to_uppercase();
            text.split_whitespace()
                .filter(|word| word.to_uppercase().contains(&upper))
                .count()
                > 1
        })
}

fn suggest_certification(job_description: Option<&str>) -> String {
    let Some(jd) = job_description else {
        return "Include relevant professional certifications if available".to_string();
    };
    let jd = jd.to_lowercase();
    let suggestion = if jd.contains("project management") {
        "Consider adding PMP certification for project management roles"
    } else if jd.contains("aws") || jd.contains("cloud") {
        "Add AWS certifications for cloud roles"
    } else if jd.contains("google analytics") || jd.contains("marketing") {
        "Add Google Analytics certification for marketing roles"
    } else {
        "Add relevant industry certifications"
    };
    suggestion.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{FormattingInfo, JobContext};
    use crate::scoring::analyzers::test_support::{run, run_with};

    #[test]
    fn test_no_certifications_scores_three_quarters() {
        let outcome = run(&CertificationsAnalyzer, "Backend engineer");
        assert_eq!(outcome.result.score, 75.0);
        assert_eq!(outcome.result.passed("acronyms_spelled_out"), Some(true));
        assert_eq!(outcome.result.passed("separate_section"), Some(true));
        assert_eq!(
            outcome.result.recommendations,
            vec!["Include relevant professional certifications if available"]
        );
    }

    #[test]
    fn test_expanded_certification_in_its_own_section() {
        let text = "Certifications\nAWS Certified Developer (AWS Associate)";
        let outcome = run(&CertificationsAnalyzer, text);
        assert_eq!(outcome.result.score, 100.0, "{:?}", outcome.result.items);
        assert_eq!(
            outcome.details,
            Some(SectionDetails::Certifications {
                certifications_found: vec!["aws certified"]
            })
        );
    }

    #[test]
    fn test_bare_acronym_without_heading() {
        let outcome = run(&CertificationsAnalyzer, "PMP holder since 2019");
        assert_eq!(outcome.result.passed("industry_certifications"), Some(true));
        assert_eq!(outcome.result.passed("acronyms_spelled_out"), Some(false));
        assert_eq!(outcome.result.passed("separate_section"), Some(false));
        assert_eq!(outcome.result.score, 50.0);
        assert_eq!(outcome.result.recommendations.len(), 2);
    }

    #[test]
    fn test_suggestion_follows_job_description() {
        let cases = [
            ("Lead project management for launches", "PMP"),
            ("Operate our cloud platform", "AWS"),
            ("Own marketing analytics", "Google Analytics"),
            ("Bake bread", "Add relevant industry certifications"),
        ];
        for (jd, expected) in cases {
            let job = JobContext::new(Some(jd.to_string()), None);
            let outcome =
                run_with(&CertificationsAnalyzer, "Engineer", &job, &FormattingInfo::default());
            assert!(
                outcome.result.recommendations[0].contains(expected),
                "{jd}: {:?}",
                outcome.result.recommendations
            );
        }
    }
}
