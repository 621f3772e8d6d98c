//! AnalyzeResultsHandler - Command handler for estimating utilities from survey results.
//!
//! Pipeline: parse results → overall utilities and importance → per-trait
//! segments → write `utilities.json`, `utilities.csv`, `conjoint_report.md`
//! and, when respondents carry traits, `segment_analysis.json`.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::analysis::{AnalysisError, AnalysisSummary, SegmentAnalysis, SegmentAnalyzer};
use crate::domain::design::DesignSpec;
use crate::ports::{
    ArtifactStore, DocumentStore, RenderError, ReportRenderer, ResultsParser, StorageError,
};

pub const UTILITIES_JSON: &str = "utilities.json";
pub const UTILITIES_CSV: &str = "utilities.csv";
pub const SEGMENTS_JSON: &str = "segment_analysis.json";
pub const REPORT_MD: &str = "conjoint_report.md";

/// Command to analyze a results table against its design spec.
#[derive(Debug, Clone)]
pub struct AnalyzeResultsCommand {
    pub results_path: PathBuf,
    /// Design spec or choice-sets document.
    pub design_spec_path: PathBuf,
    pub output_dir: PathBuf,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeResultsResult {
    pub summary: AnalysisSummary,
    pub segments: SegmentAnalysis,
    /// Files written, in the order they were produced.
    pub written: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum AnalyzeResultsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Handler for the full analysis step.
pub struct AnalyzeResultsHandler {
    store: Arc<dyn ArtifactStore>,
    parser: Arc<dyn ResultsParser>,
    renderer: Arc<dyn ReportRenderer>,
}

impl AnalyzeResultsHandler {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        parser: Arc<dyn ResultsParser>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            store,
            parser,
            renderer,
        }
    }

    pub fn handle(
        &self,
        cmd: AnalyzeResultsCommand,
    ) -> Result<AnalyzeResultsResult, AnalyzeResultsError> {
        // 1. Load inputs
        let spec: DesignSpec = self.store.load_document(&cmd.design_spec_path)?;
        let content = self.store.read_to_string(&cmd.results_path)?;

        // 2. Parse
        let records = self.parser.parse(&content, &spec)?;
        if records.is_empty() {
            return Err(AnalysisError::NoChoiceRecords.into());
        }

        // 3. Estimate
        let summary = AnalysisSummary::compute(&records, &spec.attributes);
        let segments = SegmentAnalyzer::analyze(&records, &spec.attributes);
        if segments.is_empty() {
            info!("No respondent trait columns found, skipping segment analysis");
        }

        // 4. Write outputs
        self.store.create_dir_all(&cmd.output_dir)?;
        let mut written = Vec::with_capacity(4);

        written.push(
            self.store
                .save_json(&cmd.output_dir.join(UTILITIES_JSON), &summary)?,
        );

        let csv = self.renderer.utilities_csv(&summary, &spec.attributes)?;
        written.push(self.store.write(&cmd.output_dir.join(UTILITIES_CSV), &csv)?);

        let report = self.renderer.analysis_report(&summary, &segments);
        written.push(self.store.write(&cmd.output_dir.join(REPORT_MD), &report)?);

        if !segments.is_empty() {
            written.push(
                self.store
                    .save_json(&cmd.output_dir.join(SEGMENTS_JSON), &segments)?,
            );
        }

        info!(
            observations = summary.n_observations,
            segments = segments.len(),
            files = written.len(),
            "Analysis complete"
        );

        Ok(AnalyzeResultsResult {
            summary,
            segments,
            written,
        })
    }
}
