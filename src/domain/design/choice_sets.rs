//! Choice tasks, design versions and the choice-sets document.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeSpec, Profile};

use super::DesignSpec;

/// Profiles presented together in one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceTask {
    profiles: Vec<Profile>,
}

impl ChoiceTask {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// True when no two profiles in the task are equal.
    pub fn is_pairwise_distinct(&self) -> bool {
        self.profiles
            .iter()
            .enumerate()
            .all(|(i, p)| !self.profiles[i + 1..].contains(p))
    }

    /// Smallest attribute difference between any two profiles of the task.
    pub fn min_pairwise_diff(&self) -> Option<usize> {
        let mut min = None;
        for (i, a) in self.profiles.iter().enumerate() {
            for b in &self.profiles[i + 1..] {
                let diff = a.diff_count(b);
                min = Some(min.map_or(diff, |m: usize| m.min(diff)));
            }
        }
        min
    }

    /// Randomizes presentation order independently of selection order.
    pub fn shuffle_presentation<R: Rng>(&mut self, rng: &mut R) {
        self.profiles.shuffle(rng);
    }
}

/// One independently generated set of choice tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignVersion {
    /// 1-based version number.
    pub version: usize,
    /// Balance score rounded to 4 decimals.
    pub balance_score: f64,
    pub choice_sets: Vec<ChoiceTask>,
}

impl DesignVersion {
    pub fn new(version: usize, balance_score: f64, choice_sets: Vec<ChoiceTask>) -> Self {
        Self {
            version,
            balance_score: round_to(balance_score, 4),
            choice_sets,
        }
    }
}

/// Output of design generation: the echoed spec plus every version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSetsDocument {
    pub attributes: AttributeSpec,
    pub tasks_per_version: usize,
    pub profiles_per_task: usize,
    pub n_versions: usize,
    pub min_attribute_diff: usize,
    pub seed: u64,
    pub include_none: bool,
    pub total_profiles: usize,
    pub versions: Vec<DesignVersion>,
}

impl ChoiceSetsDocument {
    pub fn new(spec: &DesignSpec, total_profiles: usize, versions: Vec<DesignVersion>) -> Self {
        Self {
            attributes: spec.attributes.clone(),
            tasks_per_version: spec.tasks_per_version,
            profiles_per_task: spec.profiles_per_task,
            n_versions: spec.n_versions,
            min_attribute_diff: spec.min_attribute_diff,
            seed: spec.seed,
            include_none: spec.include_none,
            total_profiles,
            versions,
        }
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
