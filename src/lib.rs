//! Conjoint Sherpa - Choice-based conjoint study toolkit
//!
//! This crate generates level-balanced choice-set designs, estimates
//! part-worth utilities and attribute importance from survey results, and
//! predicts market shares with a multinomial logit model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
