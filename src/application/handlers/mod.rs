//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod design;
pub mod project;

pub use analysis::{
    AnalyzeResultsCommand, AnalyzeResultsError, AnalyzeResultsHandler, AnalyzeResultsResult,
    SimulateMarketError, SimulateMarketHandler, SimulateMarketQuery, SimulateMarketResult,
};
pub use design::{
    GenerateDesignCommand, GenerateDesignError, GenerateDesignHandler, GenerateDesignResult,
};
pub use project::{
    ProjectStatus, SetupProjectCommand, SetupProjectError, SetupProjectHandler,
    SetupProjectResult,
};
