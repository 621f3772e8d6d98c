//! Design search configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on restarts per design version.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Design search configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Random restarts per design version
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl SearchConfig {
    /// Validate search configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ValidationError::InvalidIterations {
                max: MAX_ITERATIONS,
                actual: self.iterations,
            });
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> usize {
    1000
}
