//! Results adapters - Implementations of the ResultsParser port.

mod csv_results_parser;

pub use csv_results_parser::CsvResultsParser;
