//! Analysis errors.

use thiserror::Error;

/// Errors raised while turning results into utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// No row of the results table produced a usable choice.
    #[error("No valid choice records found in results")]
    NoChoiceRecords,

    /// The results table could not be read at all.
    #[error("Malformed results table: {0}")]
    MalformedResults(String),
}

impl AnalysisError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        AnalysisError::MalformedResults(reason.into())
    }
}
