use thiserror::Error;

/// Reasons the engine refuses to score a résumé.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Resume text is too short for analysis ({actual} characters, minimum {min})")]
    TextTooShort { min: usize, actual: usize },
}
