use std::collections::BTreeSet;

use tracing::debug;

use crate::scoring::analyzers::{
    ResumeDocument, Section, SectionAnalyzer, SectionDetails, SectionOutcome,
};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{
    find_soft_skills, find_technical_skills, percentage, ranked_keywords, token_set,
};
use crate::scoring::tables::{ScoringTables, IMPORTANT_KEYWORDS, STOP_WORDS};

/// Job-description keyword coverage, in percent, that must be exceeded.
const KEYWORD_MATCH_THRESHOLD: f64 = 60.0;
const MIN_INDUSTRY_TERMS: usize = 3;
const KEYWORD_FREQUENCY: std::ops::RangeInclusive<usize> = 2..=5;
/// Distinct skills per 100 words must stay below this.
const MAX_KEYWORD_DENSITY: f64 = 15.0;
const MISSING_KEYWORDS_REPORTED: usize = 10;
const MISSING_KEYWORDS_SHOWN: usize = 5;

pub struct KeywordsAnalyzer;

impl SectionAnalyzer for KeywordsAnalyzer {
    fn section(&self) -> Section {
        Section::KeywordsRelevance
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let lower = doc.lower.as_str();

        let coverage = doc
            .job
            .description()
            .map(|jd| KeywordCoverage::measure(doc.tables, lower, jd));

        let technical = find_technical_skills(doc.tables, lower).len();
        let soft = find_soft_skills(lower).len();

        // A title with no known industry has no terms to use, so it can never pass.
        let industry_ok = doc.job.title().map_or(true, |title| {
            let used = doc.tables.industry_for_title(title).map_or(0, |industry| {
                let used = industry.terms.iter().filter(|term| lower.contains(*term)).count();
                debug!(industry = industry.name, used, "industry terms counted");
                used
            });
            used >= MIN_INDUSTRY_TERMS
        });

        let frequency_ok = IMPORTANT_KEYWORDS
            .iter()
            .map(|keyword| lower.matches(keyword).count())
            .filter(|&count| count > 0)
            .all(|count| KEYWORD_FREQUENCY.contains(&count));

        let density = percentage(technical + soft, doc.word_count);

        let mut checklist = Checklist::new();
        checklist
            .check_or(
                "jd_keywords_included",
                coverage
                    .as_ref()
                    .map_or(true, |c| c.percentage > KEYWORD_MATCH_THRESHOLD),
                || {
                    let shown = coverage
                        .as_ref()
                        .map(|c| c.missing.as_slice())
                        .unwrap_or_default();
                    if shown.is_empty() {
                        "Mirror the wording of the job description throughout your resume"
                            .to_string()
                    } else {
                        let shown: Vec<&str> = shown
                            .iter()
                            .take(MISSING_KEYWORDS_SHOWN)
                            .map(String::as_str)
                            .collect();
                        format!("Add missing keywords: {}", shown.join(", "))
                    }
                },
            )
            .check_or("hard_soft_balance", technical > 0 && soft > 0, || {
                "Include both technical and soft skills throughout your resume".to_string()
            })
            .check_or("industry_terms", industry_ok, || {
                "Use more industry-specific terminology".to_string()
            })
            .check_or("appropriate_frequency", frequency_ok, || {
                "Mention each important keyword two to five times across your resume".to_string()
            })
            .check_or("no_keyword_stuffing", density < MAX_KEYWORD_DENSITY, || {
                "Reduce keyword density - use keywords naturally".to_string()
            });

        let (keyword_match_percentage, missing_keywords) = coverage
            .map(|c| (c.percentage, c.missing))
            .unwrap_or_default();

        SectionOutcome::new(self.section(), checklist.finish()).with_details(
            SectionDetails::Keywords {
                keyword_match_percentage,
                missing_keywords,
            },
        )
    }
}

/// How much of a job description's vocabulary the résumé repeats.
struct KeywordCoverage {
    percentage: f64,
    /// Up to ten absent keywords, most frequent in the job description first.
    missing: Vec<String>,
}

impl KeywordCoverage {
    fn measure(tables: &ScoringTables, lower: &str, job_description: &str) -> Self {
        let jd_lower = job_description.to_lowercase();
        let jd_keywords: BTreeSet<String> = token_set(tables, &jd_lower)
            .into_iter()
            .filter(|token| !STOP_WORDS.contains(&token.as_str()))
            .collect();
        let resume_tokens = token_set(tables, lower);

        let matched = jd_keywords.intersection(&resume_tokens).count();
        let missing = ranked_keywords(tables, &jd_lower)
            .into_iter()
            .filter(|keyword| !resume_tokens.contains(keyword))
            .take(MISSING_KEYWORDS_REPORTED)
            .collect();

        Self {
            percentage: percentage(matched, jd_keywords.len()),
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{FormattingInfo, JobContext};
    use crate::scoring::analyzers::test_support::{run, run_with};
    use crate::scoring::fixtures::EIGHT_SKILLS;

    fn keywords(outcome: &SectionOutcome) -> (f64, Vec<String>) {
        match &outcome.details {
            Some(SectionDetails::Keywords {
                keyword_match_percentage,
                missing_keywords,
            }) => (*keyword_match_percentage, missing_keywords.clone()),
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_without_job_description_nothing_is_missing() {
        let outcome = run(&KeywordsAnalyzer, EIGHT_SKILLS);
        assert_eq!(outcome.result.passed("jd_keywords_included"), Some(true));
        assert_eq!(outcome.result.passed("industry_terms"), Some(true));
        assert_eq!(keywords(&outcome), (0.0, Vec::new()));
    }

    #[test]
    fn test_sixty_percent_coverage_is_not_enough() {
        let job = JobContext::new(
            Some("Kafka streaming platform engineer with Python and Kafka".to_string()),
            None,
        );
        let outcome = run_with(&KeywordsAnalyzer, EIGHT_SKILLS, &job, &FormattingInfo::default());
        let (pct, missing) = keywords(&outcome);
        assert_eq!(pct, 60.0);
        assert_eq!(missing, vec!["kafka", "streaming"]);
        assert_eq!(outcome.result.passed("jd_keywords_included"), Some(false));
        assert_eq!(
            outcome.result.recommendations[0],
            "Add missing keywords: kafka, streaming"
        );
    }

    #[test]
    fn test_missing_keywords_are_capped_at_ten() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let job = JobContext::new(Some(jd.to_string()), None);
        let outcome = run_with(&KeywordsAnalyzer, EIGHT_SKILLS, &job, &FormattingInfo::default());
        let (_, missing) = keywords(&outcome);
        assert_eq!(missing.len(), 10);
        assert_eq!(missing[0], "alpha");
    }

    #[test]
    fn test_industry_terms_follow_job_title() {
        let text = "Built software for api development against a database";
        let job = JobContext::new(None, Some("Software Engineer".to_string()));
        let outcome = run_with(&KeywordsAnalyzer, text, &job, &FormattingInfo::default());
        assert_eq!(outcome.result.passed("industry_terms"), Some(true));

        let outcome = run_with(&KeywordsAnalyzer, "Baked bread", &job, &FormattingInfo::default());
        assert_eq!(outcome.result.passed("industry_terms"), Some(false));

    }

    #[test]
    fn test_unrecognized_job_title_fails_industry_terms() {
        let job = JobContext::new(None, Some("Chef de Cuisine".to_string()));
        let outcome = run_with(&KeywordsAnalyzer, "Baked bread daily", &job, &FormattingInfo::default());
        assert_eq!(outcome.result.passed("industry_terms"), Some(false));
        assert!(outcome
            .result
            .recommendations
            .contains(&"Use more industry-specific terminology".to_string()));

        let blank = JobContext::new(None, Some("   ".to_string()));
        let outcome = run_with(&KeywordsAnalyzer, "Baked bread daily", &blank, &FormattingInfo::default());
        assert_eq!(outcome.result.passed("industry_terms"), Some(true));
    }

    #[test]
    fn test_single_mention_of_important_keyword_fails_frequency() {
        let outcome = run(&KeywordsAnalyzer, "Experience\nWrote code");
        assert_eq!(outcome.result.passed("appropriate_frequency"), Some(false));
        let outcome = run(&KeywordsAnalyzer, "Experience with experience");
        assert_eq!(outcome.result.passed("appropriate_frequency"), Some(true));
    }
}
