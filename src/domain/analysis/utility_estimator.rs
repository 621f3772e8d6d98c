//! Utility Estimator - counting-based part-worth utilities.

use std::collections::HashMap;

use crate::domain::foundation::{AttributeSpec, OrderedMap};

use super::{ChoiceRecord, UtilityTable};

/// Utility assigned to a level that was never chosen, before centering.
pub const NEVER_CHOSEN_PENALTY: f64 = -2.0;

/// Counting analysis over observed choices.
///
/// This is a share-of-choice heuristic, not a maximum-likelihood logit fit:
/// it assumes every level was shown in proportion to `1 / n_levels` and
/// compares that to the empirical share of choices containing the level.
pub struct UtilityEstimator;

impl UtilityEstimator {
    /// Estimates zero-centered utilities for every attribute and level.
    ///
    /// # Algorithm
    /// For each level: `ln((chosen / total_choices) / (1 / n_levels))`, or
    /// `NEVER_CHOSEN_PENALTY` when it was never chosen. Each attribute's mean
    /// is then subtracted from its levels.
    ///
    /// # Edge Cases
    /// - "None" records are excluded from every count
    /// - No chosen profiles at all: every level gets the penalty, which
    ///   centers to 0
    /// - Levels in records that the specification does not list are ignored
    pub fn estimate(records: &[ChoiceRecord], spec: &AttributeSpec) -> UtilityTable {
        let chosen: Vec<_> = records.iter().filter_map(|r| r.chosen.as_ref()).collect();
        let total_choices = chosen.len();

        let mut table = UtilityTable::new();
        for (attribute, levels) in spec.iter() {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for profile in &chosen {
                if let Some(level) = profile.level(attribute) {
                    *counts.entry(level).or_insert(0) += 1;
                }
            }

            let raw: Vec<f64> = levels
                .iter()
                .map(|level| {
                    let count = counts.get(level.as_str()).copied().unwrap_or(0);
                    Self::raw_utility(count, total_choices, levels.len())
                })
                .collect();

            let mean = raw.iter().sum::<f64>() / raw.len() as f64;
            let centered: OrderedMap<f64> = levels
                .iter()
                .zip(raw)
                .map(|(level, utility)| (level.clone(), utility - mean))
                .collect();

            table.insert(attribute, centered);
        }

        table
    }

    /// Utility of one level before centering.
    pub fn raw_utility(chosen_count: usize, total_choices: usize, n_levels: usize) -> f64 {
        if chosen_count == 0 || total_choices == 0 {
            return NEVER_CHOSEN_PENALTY;
        }
        let choice_share = chosen_count as f64 / total_choices as f64;
        let expected_share = 1.0 / n_levels as f64;
        (choice_share / expected_share).ln()
    }
}
