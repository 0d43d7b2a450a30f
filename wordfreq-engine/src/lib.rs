//! Pipeline orchestration for word frequency counting
//!
//! This crate wires the pure pieces of `wordfreq-core` into a runnable
//! pipeline: read lines from an [`Input`], extract and count words with a
//! pluggable [`Executor`], and persist `<token>: <count>` records to a
//! [`Sink`].
//!
//! ```rust
//! use wordfreq_engine::{Input, Sink, WordCountPipeline};
//!
//! let pipeline = WordCountPipeline::new().unwrap();
//! let mut sink = Sink::memory();
//! let summary = pipeline
//!     .run(Input::from_text("The cat sat.\nThe dog ran."), &mut sink)
//!     .unwrap();
//!
//! assert_eq!(summary.distinct_words, 5);
//! assert!(sink.lines().unwrap().contains(&"The: 2".to_string()));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod pipeline;
pub mod sink;

// Re-export key types
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{is_remote_locator, Input, LineStream, STDIN_LOCATOR};
pub use pipeline::{CountResult, RunSummary, WordCountPipeline, WordCountPipelineBuilder};
pub use sink::{staging_file_for, Sink, STDOUT_LOCATOR};

// Re-export from core for convenience
pub use wordfreq_core::{
    DistributionSnapshot, LineMetrics, MetricsSnapshot, OutputOrder, WordCount, WordCounts,
    EMPTY_LINES, LINE_LEN_DISTRO, METRICS_NAMESPACE,
};
