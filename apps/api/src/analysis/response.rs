//! The response shape the résumé-checker front end consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::scoring::analyzers::Section;
use crate::scoring::report::{AnalysisReport, VisualizationSlice};

/// Section scores below this turn their issues critical.
const CRITICAL_BELOW: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub file_name: Option<String>,

    pub overall_score: u8,
    pub keyword_match: u8,
    pub skills_match: u8,
    pub formatting_readability: u8,
    pub summary_statement: &'static str,
    pub experience_score: u8,

    pub total_keywords: usize,
    pub sections_count: usize,
    pub word_count: usize,
    pub readability_score: u8,

    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub pie_chart_data: Vec<VisualizationSlice>,
    pub report: AnalysisReport,
}

impl AnalysisResponse {
    pub fn new(report: AnalysisReport, file_name: Option<String>, text: &str) -> Self {
        let summary = &report.executive_summary;
        let readability_score = report
            .section(Section::FormattingReadability)
            .map_or(0, |outcome| outcome.result.score as u8);

        Self {
            id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            file_name,
            overall_score: summary.overall_ats_score,
            keyword_match: summary.keyword_match,
            skills_match: summary.skills_match,
            formatting_readability: summary.formatting_readability,
            summary_statement: summary.summary_statement,
            experience_score: report.scorecard.experience_relevance,
            total_keywords: report.skills_found().map_or(0, |skills| skills.total()),
            sections_count: report
                .detailed_analysis
                .iter()
                .filter(|outcome| outcome.result.score > 0.0)
                .count(),
            word_count: text.split_whitespace().count(),
            readability_score,
            issues: issues(&report),
            recommendations: report.recommendations.clone(),
            missing_keywords: report.missing_keywords.clone(),
            pie_chart_data: report.visualization.clone(),
            report,
        }
    }
}

/// One issue per section recommendation, in section order.
fn issues(report: &AnalysisReport) -> Vec<Issue> {
    report
        .detailed_analysis
        .iter()
        .flat_map(|outcome| {
            let severity = if outcome.result.score < CRITICAL_BELOW {
                Severity::Critical
            } else {
                Severity::Warning
            };
            let title = format!("{} Issue", outcome.section.title());
            outcome
                .result
                .recommendations
                .iter()
                .map(move |rec| Issue {
                    severity,
                    title: title.clone(),
                    description: rec.clone(),
                })
        })
        .collect()
}
