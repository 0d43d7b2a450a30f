//! JSON report formatter

use super::ReportFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use wordfreq_engine::{MetricsSnapshot, RunSummary, METRICS_NAMESPACE};

/// Serialized form of a run report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Metrics keyed by namespace
    pub metrics: BTreeMap<String, MetricsSnapshot>,
    /// Lines read
    pub lines_read: u64,
    /// Words extracted
    pub tokens: u64,
    /// Distinct words
    pub distinct_words: usize,
    /// Records written
    pub records_written: usize,
    /// Execution mode that ran
    pub execution_mode: String,
    /// Wall time in milliseconds
    pub elapsed_ms: u64,
}

impl From<&RunSummary> for RunReport {
    fn from(summary: &RunSummary) -> Self {
        Self {
            metrics: BTreeMap::from([(METRICS_NAMESPACE.to_string(), summary.metrics)]),
            lines_read: summary.lines_read,
            tokens: summary.tokens,
            distinct_words: summary.distinct_words,
            records_written: summary.records_written,
            execution_mode: summary.execution_mode.as_str().to_string(),
            elapsed_ms: u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// JSON formatter, one pretty-printed document per run
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn write_report(&mut self, summary: &RunSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &RunReport::from(summary))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
