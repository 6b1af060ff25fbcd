use crate::scoring::analyzers::{
    ResumeDocument, Section, SectionAnalyzer, SectionDetails, SectionOutcome,
};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{
    action_verb_count, count_bullets, count_matches, date_formats, find_years,
    has_bullet_markers, has_city_state, has_low_paragraph_ratio, is_reverse_chronological,
    percentage, token_set,
};

const MIN_ACTION_VERBS: usize = 5;
/// At most this many distinct date notations count as consistent.
const MAX_DATE_FORMATS: usize = 2;
/// Quantified matches per bullet, in percent, that must be exceeded.
const QUANTIFIED_THRESHOLD: f64 = 30.0;
/// Share of job-description tokens that must also appear in the résumé.
const ROLE_OVERLAP_THRESHOLD: f64 = 0.2;

pub struct ExperienceAnalyzer;

impl SectionAnalyzer for ExperienceAnalyzer {
    fn section(&self) -> Section {
        Section::WorkExperience
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let (text, lower, tables) = (doc.text, doc.lower.as_str(), doc.tables);
        let patterns = &tables.patterns;

        let years = find_years(tables, text);
        let formats = date_formats(tables, text);

        let bullets = count_bullets(tables, text);
        let quantified = count_matches(&patterns.quantifiable, text);
        let quantified_pct = percentage(quantified, bullets);

        let role_keywords_ok = doc.job.description().map_or(true, |jd| {
            let jd_tokens = token_set(tables, &jd.to_lowercase());
            if jd_tokens.is_empty() {
                return false;
            }
            let resume_tokens = token_set(tables, lower);
            let shared = jd_tokens.intersection(&resume_tokens).count();
            shared as f64 / jd_tokens.len() as f64 > ROLE_OVERLAP_THRESHOLD
        });

        let mut checklist = Checklist::new();
        checklist
            .check_or("reverse_chronological", is_reverse_chronological(&years), || {
                "Organize work experience in reverse chronological order".to_string()
            })
            .check_or("job_titles", patterns.job_title.is_match(text), || {
                "Include clear job titles for each position".to_string()
            })
            .check_or("company_names", patterns.company.is_match(text), || {
                "Add company names and locations for each role".to_string()
            })
            .check_or("locations", has_city_state(tables, text), || {
                "List the city and state (e.g., 'Austin, TX') for each position".to_string()
            })
            .check_or("dates", !years.is_empty(), || {
                "Include employment dates in consistent format (MM/YYYY)".to_string()
            })
            .check_or("consistent_dates", formats.len() <= MAX_DATE_FORMATS, || {
                "Use a single date format for every position".to_string()
            })
            .check_or("bullet_points", has_bullet_markers(tables, text), || {
                "Use bullet points instead of paragraphs for achievements".to_string()
            })
            .check_or("action_verbs", action_verb_count(lower) >= MIN_ACTION_VERBS, || {
                "Start each bullet point with strong action verbs".to_string()
            })
            .check_or(
                "quantifiable_achievements",
                quantified_pct > QUANTIFIED_THRESHOLD,
                || {
                    format!(
                        "Add quantifiable results to {}% of your achievements",
                        100 - quantified_pct.trunc() as i64
                    )
                },
            )
            .check_or("role_keywords", role_keywords_ok, || {
                "Mirror the terminology of the job description in your experience bullets"
                    .to_string()
            })
            .check_or("no_paragraphs", has_low_paragraph_ratio(text), || {
                "Break long paragraphs into concise bullet points".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish()).with_details(
            SectionDetails::Experience {
                quantifiable_impact_percentage: quantified_pct,
            },
        )
    }
}
