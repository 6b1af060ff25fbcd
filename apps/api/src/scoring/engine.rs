//! The scoring engine: runs every section analyzer over one résumé and assembles the report.
//!
//! Synchronous and free of I/O. Callers on an async runtime should wrap `analyze` in
//! `spawn_blocking`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::analysis::AnalysisRequest;
use crate::scoring::aggregator::ComponentScores;
use crate::scoring::analyzers::{
    default_analyzers, ResumeDocument, Section, SectionAnalyzer, SectionDetails, SectionOutcome,
};
use crate::scoring::error::AnalysisError;
use crate::scoring::prioritizer::prioritize;
use crate::scoring::report::{AnalysisReport, Scorecard};
use crate::scoring::tables::{ScoringTables, TablesError};

/// Trimmed résumé text shorter than this is rejected.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 100;

pub struct AtsEngine {
    tables: Arc<ScoringTables>,
    analyzers: Vec<Box<dyn SectionAnalyzer>>,
    min_text_chars: usize,
}

impl AtsEngine {
    pub fn new(tables: Arc<ScoringTables>, min_text_chars: usize) -> Self {
        Self {
            tables,
            analyzers: default_analyzers(),
            min_text_chars,
        }
    }

    /// Compiles the scoring tables and uses the default minimum text length.
    pub fn with_defaults() -> Result<Self, TablesError> {
        Ok(Self::new(
            Arc::new(ScoringTables::new()?),
            DEFAULT_MIN_TEXT_CHARS,
        ))
    }

    pub fn min_text_chars(&self) -> usize {
        self.min_text_chars
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        let text = request.raw_text.as_str();
        let actual = text.trim().chars().count();
        if actual < self.min_text_chars {
            return Err(AnalysisError::TextTooShort {
                min: self.min_text_chars,
                actual,
            });
        }

        let job = request.job_context();
        let doc = ResumeDocument::new(text, &job, &request.formatting_info, &self.tables);

        let outcomes: Vec<SectionOutcome> = self
            .analyzers
            .iter()
            .map(|analyzer| {
                let outcome = analyzer.analyze(&doc);
                debug!(
                    section = outcome.section.key(),
                    score = outcome.result.score,
                    failed = outcome.result.recommendations.len(),
                    "section analyzed"
                );
                outcome
            })
            .collect();

        let scores = ComponentScores::from_outcomes(&outcomes);
        let scorecard = Scorecard::from_components(&scores);

        let merged: Vec<String> = outcomes
            .iter()
            .flat_map(|outcome| outcome.result.recommendations.iter().cloned())
            .collect();
        let recommendations = prioritize(&merged);

        let missing_keywords = outcomes
            .iter()
            .find(|outcome| outcome.section == Section::KeywordsRelevance)
            .and_then(|outcome| match &outcome.details {
                Some(SectionDetails::Keywords {
                    missing_keywords, ..
                }) => Some(missing_keywords.clone()),
                _ => None,
            })
            .unwrap_or_default();

        info!(
            overall = scorecard.overall_ats_score,
            words = doc.word_count,
            has_job_description = job.description().is_some(),
            "resume analyzed"
        );

        Ok(AnalysisReport {
            executive_summary: scorecard.executive_summary(),
            detailed_analysis: outcomes,
            visualization: scorecard.visualization(),
            scorecard,
            recommendations,
            missing_keywords,
        })
    }
}
