//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers load inputs through an `ArtifactStore`, run the pure domain
//! services, and persist the outputs.

pub mod handlers;

pub use handlers::{
    // Design handlers
    GenerateDesignCommand, GenerateDesignError, GenerateDesignHandler, GenerateDesignResult,
    // Analysis handlers
    AnalyzeResultsCommand, AnalyzeResultsError, AnalyzeResultsHandler, AnalyzeResultsResult,
    SimulateMarketError, SimulateMarketHandler, SimulateMarketQuery, SimulateMarketResult,
    // Project handlers
    ProjectStatus, SetupProjectCommand, SetupProjectError, SetupProjectHandler,
    SetupProjectResult,
};
