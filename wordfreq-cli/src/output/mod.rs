//! Run report formatting module

use anyhow::Result;
use wordfreq_engine::RunSummary;

/// Trait for run report formatters
pub trait ReportFormatter {
    /// Write the report for a finished run
    fn write_report(&mut self, summary: &RunSummary) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::{JsonFormatter, RunReport};
pub use text::TextFormatter;
