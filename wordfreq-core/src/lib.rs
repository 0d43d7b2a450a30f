//! Word extraction and frequency counting
//!
//! This crate holds the deterministic, I/O-free part of wordfreq:
//!
//! - **Tokenizer**: scans a line for words matching `[a-zA-Z]+('[a-z])?`
//! - **Metrics**: process-wide counters updated while lines are scanned
//!   (`extract/emptyLines` and `extract/lineLenDistro`)
//! - **Aggregation**: a mergeable token → count map that is finalized into
//!   [`WordCount`] records once the whole input has been seen
//!
//! Reading input, writing output and choosing an execution strategy live in
//! `wordfreq-engine`.
//!
//! # Example
//!
//! ```rust
//! use wordfreq_core::{extract_words, LineMetrics, OutputOrder, WordCounts};
//!
//! let metrics = LineMetrics::new();
//! let mut counts = WordCounts::new();
//!
//! for line in ["The cat sat.", "", "The dog ran."] {
//!     counts.extend(extract_words(line, &metrics));
//! }
//!
//! let records = counts.into_word_counts(OutputOrder::Alphabetical);
//! assert_eq!(records[0].to_string(), "The: 2");
//! assert_eq!(metrics.snapshot().empty_lines, 1);
//! ```

pub mod aggregate;
pub mod error;
pub mod metrics;
pub mod tokenizer;
pub mod types;

pub use aggregate::{OutputOrder, WordCounts};
pub use error::{CoreError, Result};
pub use metrics::{
    Counter, Distribution, DistributionSnapshot, LineMetrics, MetricsSnapshot, EMPTY_LINES,
    LINE_LEN_DISTRO, METRICS_NAMESPACE,
};
pub use tokenizer::{extract_words, token_spans, tokenize, Tokens, WORD_PATTERN};
pub use types::WordCount;
