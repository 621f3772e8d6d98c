//! Analysis summaries and per-segment breakdowns.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::AttributeSpec;

use super::{ChoiceRecord, ImportanceCalculator, ImportanceTable, UtilityEstimator, UtilityTable};

/// Group label for records that lack a trait other records carry.
pub const UNKNOWN_SEGMENT: &str = "unknown";

/// Utilities, importance and observation count for a set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub utilities: UtilityTable,
    pub importance: ImportanceTable,
    /// Every record, including "none" answers.
    pub n_observations: usize,
}

impl AnalysisSummary {
    /// Runs the estimator and importance calculation over `records`.
    pub fn compute(records: &[ChoiceRecord], spec: &AttributeSpec) -> Self {
        let utilities = UtilityEstimator::estimate(records, spec);
        let importance = ImportanceCalculator::compute(&utilities);
        Self {
            utilities,
            importance,
            n_observations: records.len(),
        }
    }
}

/// Trait name → trait value → summary.
pub type SegmentAnalysis = BTreeMap<String, BTreeMap<String, AnalysisSummary>>;

/// Splits records by respondent traits.
pub struct SegmentAnalyzer;

impl SegmentAnalyzer {
    /// Sorted union of trait names across all records.
    pub fn trait_names(records: &[ChoiceRecord]) -> BTreeSet<&str> {
        records
            .iter()
            .flat_map(|r| r.traits.keys().map(String::as_str))
            .collect()
    }

    /// Computes a summary per (trait, value) group.
    ///
    /// Returns an empty map when no record carries traits.
    pub fn analyze(records: &[ChoiceRecord], spec: &AttributeSpec) -> SegmentAnalysis {
        let mut analysis = SegmentAnalysis::new();

        for trait_name in Self::trait_names(records) {
            let mut groups: BTreeMap<&str, Vec<ChoiceRecord>> = BTreeMap::new();
            for record in records {
                let value = record.trait_value(trait_name).unwrap_or(UNKNOWN_SEGMENT);
                groups.entry(value).or_default().push(record.clone());
            }

            let summaries = groups
                .into_iter()
                .map(|(value, group)| (value.to_string(), AnalysisSummary::compute(&group, spec)))
                .collect();
            analysis.insert(trait_name.to_string(), summaries);
        }

        analysis
    }
}
