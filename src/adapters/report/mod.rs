//! Report adapters - Implementations of the ReportRenderer port.

mod markdown_report_renderer;

pub use markdown_report_renderer::MarkdownReportRenderer;
