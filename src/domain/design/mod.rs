//! Design Module - balanced choice-set generation.
//!
//! # Components
//!
//! - `DesignSpec` - Input record with attributes and task/option/version counts
//! - `ProfileEnumerator` - Full factorial of attribute levels
//! - `BalanceScorer` - Level-balance objective (lower is better)
//! - `DesignSearchEngine` - Randomized restarts under a min-difference rule
//! - `DesignGenerator` - One seeded search per design version
//!
//! All randomness flows through an explicitly passed generator.

mod balance_scorer;
mod choice_sets;
mod design_generator;
mod design_spec;
mod errors;
mod profile_enumerator;
mod search_engine;

pub use balance_scorer::BalanceScorer;
pub use choice_sets::{ChoiceSetsDocument, ChoiceTask, DesignVersion};
pub(crate) use choice_sets::round_to;
pub use design_generator::DesignGenerator;
pub use design_spec::{
    DesignSpec, MAX_PROFILES_PER_TASK, MAX_TASKS_OR_VERSIONS, MAX_TOTAL_PROFILES,
};
pub use errors::DesignError;
pub use profile_enumerator::ProfileEnumerator;
pub use search_engine::{DesignSearchEngine, SearchOutcome, SearchParameters};
