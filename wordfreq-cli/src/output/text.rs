//! Plain text report formatter

use super::ReportFormatter;
use anyhow::Result;
use std::io::{self, Write};
use wordfreq_engine::{RunSummary, EMPTY_LINES, LINE_LEN_DISTRO, METRICS_NAMESPACE};

/// Plain text formatter, one metric per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stderr> {
    /// Create a formatter that writes to stderr
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn write_report(&mut self, summary: &RunSummary) -> Result<()> {
        let distro = summary.metrics.line_len;

        writeln!(
            self.writer,
            "{METRICS_NAMESPACE}/{EMPTY_LINES}: {}",
            summary.metrics.empty_lines
        )?;
        writeln!(
            self.writer,
            "{METRICS_NAMESPACE}/{LINE_LEN_DISTRO}: count={} sum={} min={} max={} mean={:.2}",
            distro.count,
            distro.sum,
            distro.min,
            distro.max,
            distro.mean()
        )?;
        writeln!(
            self.writer,
            "{} words ({} distinct) from {} lines, {} records written in {:.2?} [{}]",
            summary.tokens,
            summary.distinct_words,
            summary.lines_read,
            summary.records_written,
            summary.elapsed,
            summary.execution_mode.as_str()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfreq_engine::{Input, Sink, WordCountPipeline};

    #[test]
    fn test_report_lines() {
        let mut sink = Sink::memory();
        let summary = WordCountPipeline::new()
            .unwrap()
            .run(Input::from_text("The cat sat.\n\nThe dog ran."), &mut sink)
            .unwrap();

        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer).write_report(&summary).unwrap();
        let report = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "extract/emptyLines: 1");
        assert_eq!(
            lines[1],
            "extract/lineLenDistro: count=3 sum=24 min=0 max=12 mean=8.00"
        );
        assert!(lines[2].starts_with("6 words (5 distinct) from 3 lines, 5 records written"));
        assert!(lines[2].ends_with("[sequential]"));
    }
}
