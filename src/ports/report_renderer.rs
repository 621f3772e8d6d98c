//! ReportRenderer port for the human-readable study outputs.

use thiserror::Error;

use crate::domain::analysis::{AnalysisSummary, SegmentAnalysis};
use crate::domain::foundation::AttributeSpec;
use crate::domain::simulation::MarketShare;

/// Errors raised while rendering an output document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Failed to render {document}: {reason}")]
    Failed { document: String, reason: String },
}

impl RenderError {
    pub fn failed(document: impl Into<String>, reason: impl ToString) -> Self {
        RenderError::Failed {
            document: document.into(),
            reason: reason.to_string(),
        }
    }
}

/// Renders analysis and simulation results as text documents.
pub trait ReportRenderer: Send + Sync {
    /// Flat `attribute,level,utility,importance_pct` table in attribute order
    fn utilities_csv(
        &self,
        summary: &AnalysisSummary,
        attributes: &AttributeSpec,
    ) -> Result<String, RenderError>;

    /// Full study report with importance, utilities and segments
    fn analysis_report(&self, summary: &AnalysisSummary, segments: &SegmentAnalysis) -> String;

    /// Share-of-preference table, rows in the order given
    fn market_share_table(&self, shares: &[MarketShare]) -> String;
}
