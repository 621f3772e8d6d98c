//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ordered maps, attribute specs, profiles, errors)
//! - `design` - Profile enumeration, balance scoring and design search
//! - `analysis` - Utility estimation, importance and segmentation
//! - `simulation` - Logit market-share simulation
//! - `project` - Study directory naming

pub mod analysis;
pub mod design;
pub mod foundation;
pub mod project;
pub mod simulation;
