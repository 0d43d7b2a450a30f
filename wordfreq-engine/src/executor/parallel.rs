//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
    input::LineStream,
};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use wordfreq_core::{extract_words, LineMetrics, WordCounts};

/// Parallel multi-threaded executor
///
/// Runs in two phases: every worker folds its share of the lines into a
/// private [`WordCounts`], then the partial maps are merged pairwise. The
/// only state shared between workers is the [`LineMetrics`].
pub struct ParallelExecutor {
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for ParallelExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelExecutor")
            .field(
                "threads",
                &self.pool.as_ref().map(|pool| pool.current_num_threads()),
            )
            .finish()
    }
}

impl ParallelExecutor {
    /// Create a parallel executor
    ///
    /// With `threads` set a dedicated pool of that size is built, otherwise
    /// rayon's global pool is used.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(count)
                    .thread_name(|index| format!("wordfreq-worker-{index}"))
                    .build()
                    .map_err(|e| {
                        EngineError::ExecutionError(format!("failed to build thread pool: {e}"))
                    })?,
            ),
            None => None,
        };

        Ok(Self { pool })
    }

    /// Number of worker threads that will be used
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Executor for ParallelExecutor {
    fn execute(&self, lines: LineStream, metrics: &LineMetrics) -> Result<WordCounts> {
        // Phase 1: materialize the input; a read error aborts before any work
        let lines = lines.collect::<Result<Vec<String>>>()?;

        // Phase 2: fold per worker, then merge
        let run = || count_lines(&lines, metrics);
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}

fn count_lines(lines: &[String], metrics: &LineMetrics) -> Result<WordCounts> {
    lines
        .par_iter()
        .fold(WordCounts::new, |mut partial, line| {
            partial.extend(extract_words(line, metrics));
            partial
        })
        .map(Ok::<WordCounts, EngineError>)
        .try_reduce(WordCounts::new, |left, right| Ok(left.merge(right)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;
    use crate::input::Input;

    fn sample_text() -> String {
        let mut text = String::new();
        for i in 0..2_000 {
            match i % 4 {
                0 => text.push_str("The cat sat on the mat.\n"),
                1 => text.push_str("   \n"),
                2 => text.push_str("don't stop, DON'T stop\n"),
                _ => text.push_str("Line 42: the end\n"),
            }
        }
        text
    }

    #[test]
    fn test_matches_sequential() {
        let text = sample_text();

        let seq_metrics = LineMetrics::new();
        let sequential = SequentialExecutor
            .execute(Input::from_text(text.clone()).lines().unwrap(), &seq_metrics)
            .unwrap();

        let par_metrics = LineMetrics::new();
        let parallel = ParallelExecutor::new(Some(4))
            .unwrap()
            .execute(Input::from_text(text).lines().unwrap(), &par_metrics)
            .unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(par_metrics.snapshot(), seq_metrics.snapshot());
        assert_eq!(par_metrics.snapshot().empty_lines, 500);
    }

    #[test]
    fn test_dedicated_pool_size() {
        let executor = ParallelExecutor::new(Some(3)).unwrap();
        assert_eq!(executor.threads(), 3);
        assert_eq!(executor.mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_global_pool() {
        let executor = ParallelExecutor::new(None).unwrap();
        assert!(executor.threads() >= 1);
    }

    #[test]
    fn test_empty_input() {
        let metrics = LineMetrics::new();
        let counts = ParallelExecutor::new(Some(2))
            .unwrap()
            .execute(Input::from_text("").lines().unwrap(), &metrics)
            .unwrap();
        assert!(counts.is_empty());
        assert_eq!(metrics.snapshot().lines(), 0);
    }

    #[test]
    fn test_read_error_aborts_before_counting() {
        let metrics = LineMetrics::new();
        let lines: LineStream = Box::new(
            vec![
                Ok("fine".to_string()),
                Err(EngineError::EncodingError("bad byte".to_string())),
            ]
            .into_iter(),
        );

        let result = ParallelExecutor::new(Some(2)).unwrap().execute(lines, &metrics);
        assert!(matches!(result, Err(EngineError::EncodingError(_))));
        assert_eq!(metrics.snapshot().lines(), 0);
    }
}
