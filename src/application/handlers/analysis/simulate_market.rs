//! SimulateMarketHandler - Query handler for logit share predictions.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::analysis::UtilityTable;
use crate::domain::foundation::Profile;
use crate::domain::simulation::{MarketShare, MarketSimulator};
use crate::ports::{ArtifactStore, DocumentStore, ReportRenderer, StorageError};

/// Query for share predictions over competing profiles.
#[derive(Debug, Clone)]
pub struct SimulateMarketQuery {
    /// `utilities.json` written by the analysis step.
    pub utilities_path: PathBuf,
    /// JSON list of `{attribute: level}` objects.
    pub profiles_path: PathBuf,
}

/// Ranked shares and their Markdown table.
#[derive(Debug, Clone)]
pub struct SimulateMarketResult {
    pub shares: Vec<MarketShare>,
    pub table: String,
}

#[derive(Debug, Error)]
pub enum SimulateMarketError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Either a full `utilities.json` analysis output or a bare utility table.
#[derive(Deserialize)]
#[serde(untagged)]
enum UtilitiesDocument {
    Analysis { utilities: UtilityTable },
    Table(UtilityTable),
}

impl UtilitiesDocument {
    fn into_table(self) -> UtilityTable {
        match self {
            UtilitiesDocument::Analysis { utilities } => utilities,
            UtilitiesDocument::Table(table) => table,
        }
    }
}

/// Handler for market simulation.
pub struct SimulateMarketHandler {
    store: Arc<dyn ArtifactStore>,
    renderer: Arc<dyn ReportRenderer>,
}

impl SimulateMarketHandler {
    pub fn new(store: Arc<dyn ArtifactStore>, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self { store, renderer }
    }

    pub fn handle(
        &self,
        query: SimulateMarketQuery,
    ) -> Result<SimulateMarketResult, SimulateMarketError> {
        let utilities = self
            .store
            .load_document::<UtilitiesDocument>(&query.utilities_path)?
            .into_table();
        let profiles: Vec<Profile> = self.store.load_document(&query.profiles_path)?;

        let shares =
            MarketSimulator::rank(MarketSimulator::simulate(&utilities, &profiles));
        debug!(profiles = shares.len(), "Simulated market shares");

        let table = self.renderer.market_share_table(&shares);
        Ok(SimulateMarketResult { shares, table })
    }
}
