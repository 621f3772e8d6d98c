//! Design generation errors.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised while generating a conjoint design.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    /// The design specification failed validation.
    #[error("Invalid design specification: {0}")]
    InvalidSpec(#[from] ValidationError),

    /// The full factorial is smaller than a single choice task.
    #[error("Only {available} unique profiles but {required} needed per task")]
    InsufficientProfiles { available: usize, required: usize },
}

impl DesignError {
    pub fn insufficient_profiles(available: usize, required: usize) -> Self {
        DesignError::InsufficientProfiles {
            available,
            required,
        }
    }
}
