//! Word count pipeline and builder
//!
//! Stages run strictly forward: read lines, extract words (updating the run's
//! [`LineMetrics`]), count, then format and write. Counting completes before
//! the first record is formatted.

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{auto_select, ExecutionMode, Executor, SequentialExecutor},
    input::Input,
    sink::Sink,
};
use std::time::{Duration, Instant};
use wordfreq_core::{LineMetrics, MetricsSnapshot, OutputOrder, WordCounts};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// What a run did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Final metric values
    pub metrics: MetricsSnapshot,
    /// Lines read from the input
    pub lines_read: u64,
    /// Tokens extracted across all lines
    pub tokens: u64,
    /// Distinct tokens, i.e. output records
    pub distinct_words: usize,
    /// Records written to the sink
    pub records_written: usize,
    /// Execution mode actually used
    pub execution_mode: ExecutionMode,
    /// Wall time of the run
    pub elapsed: Duration,
}

/// Counts plus the summary of how they were produced
#[derive(Debug, Clone)]
pub struct CountResult {
    /// The complete counts
    pub counts: WordCounts,
    /// Run summary (nothing written yet)
    pub summary: RunSummary,
}

/// Main word count pipeline
pub struct WordCountPipeline {
    config: EngineConfig,
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
}

impl std::fmt::Debug for WordCountPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordCountPipeline")
            .field("config", &self.config)
            .finish()
    }
}

impl WordCountPipeline {
    /// Create a pipeline with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.threads)?,
            sequential_executor: SequentialExecutor,
            config,
        })
    }

    /// Start building a pipeline
    pub fn builder() -> WordCountPipelineBuilder {
        WordCountPipelineBuilder::new()
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve the execution mode for `input`
    pub fn select_mode(&self, input: &Input) -> ExecutionMode {
        match self.config.execution_mode {
            ExecutionMode::Adaptive => {
                auto_select(input.estimated_size(), self.config.parallel_threshold)
            }
            mode => mode,
        }
    }

    fn executor(&self, mode: ExecutionMode) -> &dyn Executor {
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => &self.parallel_executor,
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel execution not compiled in, running sequentially");
                &self.sequential_executor
            }
            _ => &self.sequential_executor,
        }
    }

    /// Read, extract and count, without writing anything
    pub fn count(&self, input: Input) -> Result<CountResult> {
        let start = Instant::now();
        let mode = self.select_mode(&input);
        log::info!("counting words from {input:?} ({} mode)", mode.as_str());

        // Fresh metrics per run
        let metrics = LineMetrics::new();
        let executor = self.executor(mode);
        let counts = executor.execute(input.lines()?, &metrics)?;
        let snapshot = metrics.snapshot();

        let summary = RunSummary {
            metrics: snapshot,
            lines_read: snapshot.lines(),
            tokens: counts.total_tokens(),
            distinct_words: counts.len(),
            records_written: 0,
            execution_mode: executor.mode(),
            elapsed: start.elapsed(),
        };

        Ok(CountResult { counts, summary })
    }

    /// Run the whole pipeline into `sink`
    ///
    /// The sink is validated before the input is opened, so a bad output
    /// fails the run without reading anything.
    pub fn run(&self, input: Input, sink: &mut Sink) -> Result<RunSummary> {
        let start = Instant::now();
        sink.validate()?;

        let CountResult { counts, mut summary } = self.count(input)?;

        let records = counts
            .into_word_counts(self.config.output_order)
            .into_iter()
            .map(|record| record.to_string());
        summary.records_written = sink.write_all(records)?;
        summary.elapsed = start.elapsed();

        log::info!(
            "wrote {} records ({} tokens from {} lines) to {} in {:?}",
            summary.records_written,
            summary.tokens,
            summary.lines_read,
            sink.describe(),
            summary.elapsed
        );

        Ok(summary)
    }

    /// Run the pipeline between two resource locators
    ///
    /// The output locator is checked first.
    pub fn run_locators(&self, input: &str, output: &str) -> Result<RunSummary> {
        let mut sink = Sink::from_locator(output)?;
        let input = Input::from_locator(input)?;
        self.run(input, &mut sink)
    }
}

/// Builder for WordCountPipeline
///
/// Provides a fluent interface for configuring the pipeline.
pub struct WordCountPipelineBuilder {
    config: EngineConfig,
}

impl Default for WordCountPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordCountPipelineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive threshold in bytes
    pub fn parallel_threshold(mut self, bytes: usize) -> Self {
        self.config.parallel_threshold = bytes;
        self
    }

    /// Set the record order
    pub fn output_order(mut self, order: OutputOrder) -> Self {
        self.config.output_order = order;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<WordCountPipeline> {
        WordCountPipeline::with_config(self.config)
    }
}
