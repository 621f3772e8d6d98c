//! Analysis Module - Pure domain services for choice-based conjoint analysis.
//!
//! # Components
//!
//! - `ChoiceRecord` - One respondent-task observation
//! - `UtilityEstimator` - Counting-based part-worths, zero-centered per attribute
//! - `ImportanceCalculator` - Normalized utility range per attribute
//! - `SegmentAnalyzer` - The same analysis per respondent trait value
//!
//! All functions are pure and stateless; parsing results tables lives in
//! the adapters layer.

mod choice_record;
mod errors;
mod importance_calculator;
mod segment_analyzer;
mod tables;
mod utility_estimator;

pub use choice_record::ChoiceRecord;
pub use errors::AnalysisError;
pub use importance_calculator::ImportanceCalculator;
pub use segment_analyzer::{AnalysisSummary, SegmentAnalysis, SegmentAnalyzer, UNKNOWN_SEGMENT};
pub use tables::{ImportanceTable, UtilityTable};
pub use utility_estimator::{UtilityEstimator, NEVER_CHOSEN_PENALTY};
