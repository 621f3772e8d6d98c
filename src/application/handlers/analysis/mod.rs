//! Analysis command and query handlers.

mod analyze_results;
mod simulate_market;

pub use analyze_results::{
    AnalyzeResultsCommand, AnalyzeResultsError, AnalyzeResultsHandler, AnalyzeResultsResult,
    REPORT_MD, SEGMENTS_JSON, UTILITIES_CSV, UTILITIES_JSON,
};
pub use simulate_market::{
    SimulateMarketError, SimulateMarketHandler, SimulateMarketQuery, SimulateMarketResult,
};
