//! ATS résumé scoring.
//!
//! Text flows one way: signal detectors feed nine section analyzers, whose scores are
//! aggregated into weighted components and whose recommendations are prioritized into a
//! single list. `AtsEngine` wires the stages together and builds the `AnalysisReport`.

pub mod aggregator;
pub mod analyzers;
pub mod checklist;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod prioritizer;
pub mod readability;
pub mod report;
pub mod tables;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::AtsEngine;
pub use error::AnalysisError;
