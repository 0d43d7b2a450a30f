//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    input::LineStream,
};
use wordfreq_core::{extract_words, LineMetrics, WordCounts};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(&self, lines: LineStream, metrics: &LineMetrics) -> Result<WordCounts> {
        let mut counts = WordCounts::new();

        // Lines are consumed one at a time; nothing is buffered
        for line in lines {
            let line = line?;
            counts.extend(extract_words(&line, metrics));
        }

        Ok(counts)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
