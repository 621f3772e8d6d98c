//! SetupProjectHandler - Command handler for creating a dated study directory.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::info;

use crate::domain::foundation::ValidationError;
use crate::domain::project::{StudyDirectory, DESIGN_MARKER};
use crate::ports::{ArtifactStore, StorageError};

/// Command to set up a study directory for a research question.
#[derive(Debug, Clone)]
pub struct SetupProjectCommand {
    pub question: String,
    pub base_dir: PathBuf,
    /// Defaults to today's local date.
    pub date: Option<NaiveDate>,
}

/// Whether the study directory already held a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    New,
    Exists,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::New => "NEW",
            ProjectStatus::Exists => "EXISTS",
        }
    }
}

/// Result of project setup.
#[derive(Debug, Clone)]
pub struct SetupProjectResult {
    pub directory: StudyDirectory,
    pub path: PathBuf,
    pub status: ProjectStatus,
}

#[derive(Debug, Error)]
pub enum SetupProjectError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handler for project directory setup.
pub struct SetupProjectHandler {
    store: Arc<dyn ArtifactStore>,
}

impl SetupProjectHandler {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: SetupProjectCommand) -> Result<SetupProjectResult, SetupProjectError> {
        let date = cmd.date.unwrap_or_else(|| Local::now().date_naive());
        let directory = StudyDirectory::for_question(&cmd.question, date)?;
        let path = cmd.base_dir.join(directory.name());

        self.store.create_dir_all(&path)?;

        let status = if self.store.exists(&path.join(DESIGN_MARKER)) {
            ProjectStatus::Exists
        } else {
            ProjectStatus::New
        };

        info!(directory = directory.name(), status = status.as_str(), "Study directory ready");

        Ok(SetupProjectResult {
            directory,
            path,
            status,
        })
    }
}
