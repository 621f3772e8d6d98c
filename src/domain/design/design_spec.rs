//! Design Spec - the input record for design generation and analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeSpec, ValidationError};

/// Option labels run `A..=Z`, which bounds the options per task.
pub const MAX_PROFILES_PER_TASK: usize = 26;

/// Upper bound for tasks per version and number of versions.
pub const MAX_TASKS_OR_VERSIONS: usize = 10_000;

/// Upper bound for the full factorial, which is enumerated in memory.
pub const MAX_TOTAL_PROFILES: usize = 100_000;

/// Design specification read from a JSON or YAML file.
///
/// Choice-sets documents written by this crate deserialize as a `DesignSpec`
/// too, so the analysis step can read either file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSpec {
    /// Attribute → ordered levels.
    pub attributes: AttributeSpec,

    /// Choice tasks shown to each respondent.
    #[serde(default = "default_tasks_per_version", alias = "n_tasks")]
    pub tasks_per_version: usize,

    /// Profiles (options) per choice task.
    #[serde(default = "default_profiles_per_task")]
    pub profiles_per_task: usize,

    /// Independent design versions to generate.
    #[serde(default = "default_n_versions")]
    pub n_versions: usize,

    /// Minimum number of differing attributes between options of a task.
    #[serde(default = "default_min_attribute_diff")]
    pub min_attribute_diff: usize,

    /// Base seed; version `v` uses `seed + v`.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Whether respondents may pick a "none of these" option.
    #[serde(default)]
    pub include_none: bool,
}

impl DesignSpec {
    /// Creates a spec with default counts for the given attributes.
    pub fn new(attributes: AttributeSpec) -> Self {
        Self {
            attributes,
            tasks_per_version: default_tasks_per_version(),
            profiles_per_task: default_profiles_per_task(),
            n_versions: default_n_versions(),
            min_attribute_diff: default_min_attribute_diff(),
            seed: default_seed(),
            include_none: false,
        }
    }

    /// Validates the task, option and version counts and the factorial size.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("tasks_per_version", self.tasks_per_version, MAX_TASKS_OR_VERSIONS)?;
        check_range("profiles_per_task", self.profiles_per_task, MAX_PROFILES_PER_TASK)?;
        check_range("n_versions", self.n_versions, MAX_TASKS_OR_VERSIONS)?;
        check_range("attributes", self.attributes.total_profiles(), MAX_TOTAL_PROFILES)?;
        Ok(())
    }

    /// Minimum attribute difference after clamping to the attribute count.
    ///
    /// A requirement larger than the number of attributes can never be met,
    /// so it drops to `max(1, n_attributes - 1)`.
    pub fn effective_min_diff(&self) -> usize {
        let n_attrs = self.attributes.len();
        if self.min_attribute_diff > n_attrs {
            n_attrs.saturating_sub(1).max(1)
        } else {
            self.min_attribute_diff
        }
    }

    /// Option labels `A, B, C, ...` for one task.
    pub fn option_labels(&self) -> Vec<char> {
        (b'A'..=b'Z')
            .take(self.profiles_per_task)
            .map(char::from)
            .collect()
    }
}

fn check_range(field: &str, value: usize, max: usize) -> Result<(), ValidationError> {
    if value == 0 || value > max {
        return Err(ValidationError::out_of_range(
            field,
            1,
            max as u64,
            value as u64,
        ));
    }
    Ok(())
}

fn default_tasks_per_version() -> usize {
    8
}

fn default_profiles_per_task() -> usize {
    3
}

fn default_n_versions() -> usize {
    4
}

fn default_min_attribute_diff() -> usize {
    2
}

fn default_seed() -> u64 {
    42
}
