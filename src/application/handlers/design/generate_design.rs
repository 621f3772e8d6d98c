//! GenerateDesignHandler - Command handler for producing choice sets.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::design::{ChoiceSetsDocument, DesignError, DesignGenerator, DesignSpec};
use crate::ports::{ArtifactStore, DocumentStore, StorageError};

/// Command to generate a design from a spec file.
#[derive(Debug, Clone)]
pub struct GenerateDesignCommand {
    /// JSON or YAML design specification.
    pub spec_path: PathBuf,
    pub output_path: PathBuf,
    /// Random restarts per version.
    pub iterations: usize,
}

/// Result of successful design generation.
#[derive(Debug, Clone)]
pub struct GenerateDesignResult {
    pub document: ChoiceSetsDocument,
    pub output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum GenerateDesignError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Design(#[from] DesignError),
}

/// Handler for generating and saving a choice-sets document.
pub struct GenerateDesignHandler {
    store: Arc<dyn ArtifactStore>,
}

impl GenerateDesignHandler {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self { store }
    }

    pub fn handle(
        &self,
        cmd: GenerateDesignCommand,
    ) -> Result<GenerateDesignResult, GenerateDesignError> {
        // 1. Load spec
        let spec: DesignSpec = self.store.load_document(&cmd.spec_path)?;

        // 2. Search every version
        let document = DesignGenerator::generate(&spec, cmd.iterations)?;

        // 3. Persist
        let output_path = self.store.save_json(&cmd.output_path, &document)?;

        info!(
            path = %output_path.display(),
            versions = document.versions.len(),
            total_profiles = document.total_profiles,
            "Wrote choice sets"
        );

        Ok(GenerateDesignResult {
            document,
            output_path,
        })
    }
}
