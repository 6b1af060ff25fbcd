use crate::scoring::analyzers::{
    ResumeDocument, Section, SectionAnalyzer, SectionDetails, SectionOutcome, SkillsFound,
};
use crate::scoring::checklist::Checklist;
use crate::scoring::detectors::{
    contains_any, count_occurrences, find_soft_skills, find_technical_skills, percentage,
};
use crate::scoring::tables::SKILLS_HEADINGS;

const SKILL_COUNT: std::ops::RangeInclusive<usize> = 8..=20;
/// Job-match percentage that must be exceeded.
const JOB_MATCH_THRESHOLD: f64 = 50.0;
/// Skill mentions per 100 words must stay below this.
const MAX_SKILL_DENSITY: f64 = 15.0;
const MISSING_SKILLS_SHOWN: usize = 3;

pub struct SkillsAnalyzer;

impl SectionAnalyzer for SkillsAnalyzer {
    fn section(&self) -> Section {
        Section::SkillsSection
    }

    fn analyze(&self, doc: &ResumeDocument<'_>) -> SectionOutcome {
        let lower = doc.lower.as_str();

        let found = SkillsFound {
            technical: find_technical_skills(doc.tables, lower),
            soft: find_soft_skills(lower),
        };
        let total = found.total();

        let has_section = contains_any(lower, SKILLS_HEADINGS);
        let has_balance = !found.technical.is_empty() && !found.soft.is_empty();
        let count_ok = SKILL_COUNT.contains(&total);

        let job_match = doc.job.description().map(|jd| {
            let jd_lower = jd.to_lowercase();
            let wanted = SkillsFound {
                technical: find_technical_skills(doc.tables, &jd_lower),
                soft: find_soft_skills(&jd_lower),
            };
            JobSkillMatch::compare(&found, &wanted)
        });
        let job_match_percentage = job_match.as_ref().map_or(0.0, |m| m.percentage);
        let job_keywords_ok = job_match
            .as_ref()
            .map_or(true, |m| m.percentage > JOB_MATCH_THRESHOLD);

        let mentions: usize = count_occurrences(lower, &found.technical)
            + count_occurrences(lower, &found.soft);
        let density = if doc.word_count > 0 {
            mentions as f64 / doc.word_count as f64 * 100.0
        } else {
            0.0
        };

        let mut checklist = Checklist::new();
        checklist
            .check_or("dedicated_section", has_section, || {
                "Create a dedicated Skills section".to_string()
            })
            .check_or("skill_balance", has_balance, || {
                "Include both technical and soft skills".to_string()
            })
            .check_or("appropriate_count", count_ok, || {
                format!("Include 10-15 relevant skills (currently have {total})")
            })
            .check_or("job_keywords", job_keywords_ok, || {
                let missing = job_match.as_ref().map(|m| m.missing.as_slice()).unwrap_or_default();
                if missing.is_empty() {
                    "Align your listed skills with the requirements in the job description"
                        .to_string()
                } else {
                    format!(
                        "Add missing skills from job description such as: {}",
                        missing
                            .iter()
                            .take(MISSING_SKILLS_SHOWN)
                            .copied()
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                }
            })
            .check_or("no_overstuffing", density < MAX_SKILL_DENSITY, || {
                "Reduce keyword stuffing - use skills naturally throughout resume".to_string()
            });

        SectionOutcome::new(self.section(), checklist.finish()).with_details(
            SectionDetails::Skills {
                skills_found: found,
                job_match_percentage,
            },
        )
    }
}

/// Overlap between the résumé's skills and the skills a job description asks for.
struct JobSkillMatch {
    percentage: f64,
    /// Requested skills absent from the résumé, technical first, in dictionary order.
    missing: Vec<&'static str>,
}

impl JobSkillMatch {
    fn compare(found: &SkillsFound, wanted: &SkillsFound) -> Self {
        let missing: Vec<&'static str> = wanted
            .technical
            .iter()
            .filter(|skill| !found.technical.contains(*skill))
            .chain(wanted.soft.iter().filter(|skill| !found.soft.contains(*skill)))
            .copied()
            .collect();
        let matched = wanted.total() - missing.len();
        Self {
            percentage: percentage(matched, wanted.total()),
            missing,
        }
    }
}
