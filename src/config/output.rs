//! Output location configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Default locations for generated files
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Choice-sets document written by `generate-design`
    #[serde(default = "default_choice_sets_file")]
    pub choice_sets_file: PathBuf,

    /// Directory for analysis outputs
    #[serde(default = "default_analysis_dir")]
    pub analysis_dir: PathBuf,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.choice_sets_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("output.choice_sets_file"));
        }
        if self.analysis_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("output.analysis_dir"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            choice_sets_file: default_choice_sets_file(),
            analysis_dir: default_analysis_dir(),
        }
    }
}

fn default_choice_sets_file() -> PathBuf {
    PathBuf::from("conjoint_choice_sets.json")
}

fn default_analysis_dir() -> PathBuf {
    PathBuf::from(".")
}
