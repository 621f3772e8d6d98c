//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application handlers and the outside world. Adapters implement these
//! ports.
//!
//! - `ArtifactStore` - Read input files and write study outputs
//! - `DocumentStore` - Typed JSON/YAML helpers over any `ArtifactStore`
//! - `ResultsParser` - Survey results table to choice records
//! - `ReportRenderer` - CSV and Markdown renderings of results

mod artifact_store;
mod report_renderer;
mod results_parser;

pub use artifact_store::{ArtifactStore, DocumentFormat, DocumentStore, StorageError};
pub use report_renderer::{RenderError, ReportRenderer};
pub use results_parser::ResultsParser;
