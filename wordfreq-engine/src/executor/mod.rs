//! Execution strategies for the extract-and-count stages

use crate::{error::Result, input::LineStream};
use wordfreq_core::{LineMetrics, WordCounts};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded, streams lines as they are read
    Sequential,
    /// Multi-threaded, materializes the lines first
    Parallel,
    /// Pick one of the above from the input size
    Adaptive,
}

impl ExecutionMode {
    /// Lowercase name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Trait for execution strategies
///
/// An executor drains `lines`, runs every line through
/// [`wordfreq_core::extract_words`] with the shared `metrics`, and returns
/// the complete counts. It only returns once the line stream is exhausted.
pub trait Executor: Send + Sync {
    /// Extract and count the words of every line
    fn execute(&self, lines: LineStream, metrics: &LineMetrics) -> Result<WordCounts>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Resolve [`ExecutionMode::Adaptive`] from the estimated input size
///
/// Inputs of unknown size (pipes) stay sequential so they are streamed
/// instead of buffered.
pub fn auto_select(estimated_size: Option<usize>, threshold: usize) -> ExecutionMode {
    match estimated_size {
        None => ExecutionMode::Sequential,
        Some(size) if size < 1024 => {
            // Very small inputs: always sequential
            ExecutionMode::Sequential
        }
        Some(size) if size < threshold => ExecutionMode::Sequential,
        Some(_) => {
            #[cfg(feature = "parallel")]
            {
                if num_cpus::get() > 1 {
                    return ExecutionMode::Parallel;
                }
            }

            ExecutionMode::Sequential
        }
    }
}
