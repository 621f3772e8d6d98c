//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary of
//! the conjoint domain: ordered maps, attribute specifications and profiles.

mod attribute_spec;
mod errors;
mod ordered_map;
mod profile;

pub use attribute_spec::{AttributeSpec, AttributeSpecBuilder};
pub use errors::ValidationError;
pub use ordered_map::OrderedMap;
pub use profile::Profile;
