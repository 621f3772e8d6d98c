//! ResultsParser port for turning a survey results table into choice records.

use crate::domain::analysis::{AnalysisError, ChoiceRecord};
use crate::domain::design::DesignSpec;

/// Parses exported survey results into per-task choice observations.
///
/// Implementations map each answer back to the attribute levels that were
/// shown for the chosen option, using the design spec for the task count,
/// option labels and attribute names.
pub trait ResultsParser: Send + Sync {
    /// Parse the full results text.
    ///
    /// Rows whose answers cannot be mapped are skipped. A table that
    /// cannot be read at all is `AnalysisError::MalformedResults`.
    fn parse(&self, content: &str, spec: &DesignSpec) -> Result<Vec<ChoiceRecord>, AnalysisError>;
}
