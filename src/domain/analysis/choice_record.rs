//! Choice Record - one respondent's answer to one task.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Profile;

/// One respondent-task observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// 1-based task number.
    pub task: usize,
    /// The chosen profile, or `None` when the "none" option was picked.
    pub chosen: Option<Profile>,
    /// Respondent trait name → value, used for segmentation.
    pub traits: BTreeMap<String, String>,
}

impl ChoiceRecord {
    /// Creates a record for a chosen profile.
    pub fn chosen(task: usize, profile: Profile) -> Self {
        Self {
            task,
            chosen: Some(profile),
            traits: BTreeMap::new(),
        }
    }

    /// Creates a record for a "none of these" answer.
    pub fn none_chosen(task: usize) -> Self {
        Self {
            task,
            chosen: None,
            traits: BTreeMap::new(),
        }
    }

    /// Attaches respondent traits.
    pub fn with_traits(mut self, traits: BTreeMap<String, String>) -> Self {
        self.traits = traits;
        self
    }

    /// Adds a single respondent trait.
    pub fn with_trait(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.traits.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a respondent trait.
    pub fn trait_value(&self, name: &str) -> Option<&str> {
        self.traits.get(name).map(String::as_str)
    }
}
