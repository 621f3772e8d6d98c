//! Simulation Module - what-if share predictions from estimated utilities.

mod market_simulator;

pub use market_simulator::{MarketShare, MarketSimulator};
