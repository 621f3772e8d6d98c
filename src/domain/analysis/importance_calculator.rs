//! Importance Calculator - normalized utility ranges.

use super::{ImportanceTable, UtilityTable};

/// Derives attribute importance from part-worth utilities.
pub struct ImportanceCalculator;

impl ImportanceCalculator {
    /// Computes each attribute's share of the total utility range.
    ///
    /// # Algorithm
    /// `importance = (max - min) / Σ(max - min) × 100`
    ///
    /// # Edge Cases
    /// - Attribute without levels: range 0
    /// - Every range 0: every importance is 0
    pub fn compute(utilities: &UtilityTable) -> ImportanceTable {
        let ranges: Vec<(&str, f64)> = utilities
            .iter()
            .map(|(attribute, levels)| (attribute, Self::range(levels.values().copied())))
            .collect();

        let total: f64 = ranges.iter().map(|(_, r)| r).sum();

        let mut importance = ImportanceTable::new();
        for (attribute, range) in ranges {
            let pct = if total > 0.0 { range / total * 100.0 } else { 0.0 };
            importance.insert(attribute, pct);
        }
        importance
    }

    fn range(values: impl Iterator<Item = f64>) -> f64 {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min.is_finite() && max.is_finite() {
            max - min
        } else {
            0.0
        }
    }
}
