//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `storage` - Artifact stores (local filesystem, in-memory)
//! - `results` - Survey results table parsing
//! - `report` - Markdown and CSV report rendering

pub mod report;
pub mod results;
pub mod storage;

pub use report::MarkdownReportRenderer;
pub use results::CsvResultsParser;
pub use storage::{FileArtifactStore, InMemoryArtifactStore};
