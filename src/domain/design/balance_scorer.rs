//! Balance Scorer - level-balance objective for the design search.

use std::collections::HashMap;

use crate::domain::foundation::{AttributeSpec, Profile};

use super::ChoiceTask;

/// Chi-squared-like deviation of level exposure from a uniform spread.
pub struct BalanceScorer;

impl BalanceScorer {
    /// Scores a collection of choice tasks. Lower is better; 0 is perfectly
    /// uniform level exposure.
    ///
    /// # Algorithm
    /// For every attribute, with `n` profile slots across all tasks and `k`
    /// levels: `expected = n / k` and the score accumulates
    /// `(observed - expected)^2 / expected` per level.
    ///
    /// # Edge Cases
    /// - No tasks: 0 (expected counts are 0 and skipped)
    /// - Presentation order inside a task does not matter
    pub fn score(choice_sets: &[ChoiceTask], spec: &AttributeSpec) -> f64 {
        Self::score_slots(choice_sets.iter().flat_map(|task| task.profiles()), spec)
    }

    /// Scores a flat sequence of profile slots.
    pub fn score_slots<'a, I>(slots: I, spec: &AttributeSpec) -> f64
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let mut counts: Vec<HashMap<&'a str, usize>> = vec![HashMap::new(); spec.len()];
        let mut total = 0usize;

        for profile in slots {
            total += 1;
            for (idx, attribute) in spec.names().enumerate() {
                if let Some(level) = profile.level(attribute) {
                    *counts[idx].entry(level).or_insert(0) += 1;
                }
            }
        }

        let mut score = 0.0;
        for ((_, levels), observed) in spec.iter().zip(&counts) {
            let expected = total as f64 / levels.len() as f64;
            if expected <= 0.0 {
                continue;
            }
            for level in levels {
                let obs = observed.get(level.as_str()).copied().unwrap_or(0) as f64;
                score += (obs - expected).powi(2) / expected;
            }
        }

        score
    }
}
