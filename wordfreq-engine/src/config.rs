//! Configuration types for the engine

use crate::{
    error::{EngineError, Result},
    ExecutionMode,
};
use wordfreq_core::OutputOrder;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Minimum input size in bytes for adaptive mode to go parallel
    pub parallel_threshold: usize,
    /// Order of the written records
    pub output_order: OutputOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 1024 * 1024, // 1MB
            output_order: OutputOrder::Unordered,
        }
    }
}

impl EngineConfig {
    /// Always run on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Self::default()
        }
    }

    /// Always run on the thread pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    /// Check the configuration before any I/O happens
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
