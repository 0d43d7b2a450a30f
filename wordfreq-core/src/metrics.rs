//! Line metrics collected during extraction
//!
//! Both metrics are aggregates shared by every extraction call of a run and
//! may be updated from many threads at once, so they are built from atomics.
//! A fresh [`LineMetrics`] is created per run and read once the run has
//! finished.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Namespace the line metrics are reported under
pub const METRICS_NAMESPACE: &str = "extract";

/// Name of the blank line counter
pub const EMPTY_LINES: &str = "emptyLines";

/// Name of the line length distribution
pub const LINE_LEN_DISTRO: &str = "lineLenDistro";

/// Monotonic counter
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` to the counter
    pub fn inc(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    /// Current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Running count/sum/min/max over a series of values
#[derive(Debug)]
pub struct Distribution {
    count: AtomicU64,
    sum: AtomicU64,
    min: AtomicU64,
    max: AtomicU64,
}

impl Default for Distribution {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution {
    /// Create an empty distribution
    pub fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum: AtomicU64::new(0),
            min: AtomicU64::new(u64::MAX),
            max: AtomicU64::new(0),
        }
    }

    /// Record one value
    pub fn update(&self, value: u64) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum.fetch_add(value, Ordering::Relaxed);
        self.min.fetch_min(value, Ordering::Relaxed);
        self.max.fetch_max(value, Ordering::Relaxed);
    }

    /// Copy out the current state.
    ///
    /// An empty distribution reports `min` and `max` as 0.
    pub fn snapshot(&self) -> DistributionSnapshot {
        let count = self.count.load(Ordering::Relaxed);
        if count == 0 {
            return DistributionSnapshot::default();
        }

        DistributionSnapshot {
            count,
            sum: self.sum.load(Ordering::Relaxed),
            min: self.min.load(Ordering::Relaxed),
            max: self.max.load(Ordering::Relaxed),
        }
    }
}

/// Immutable view of a [`Distribution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DistributionSnapshot {
    /// Number of recorded values
    pub count: u64,
    /// Sum of recorded values
    pub sum: u64,
    /// Smallest recorded value
    pub min: u64,
    /// Largest recorded value
    pub max: u64,
}

impl DistributionSnapshot {
    /// Arithmetic mean, 0.0 when nothing was recorded
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }
}

/// Metrics updated by every extraction call of a run
#[derive(Debug, Default)]
pub struct LineMetrics {
    empty_lines: Counter,
    line_len: Distribution,
}

impl LineMetrics {
    /// Create a fresh set of metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one input line.
    ///
    /// The raw length in characters goes into the distribution. A line that
    /// is blank after trimming whitespace also counts as an empty line.
    pub fn observe_line(&self, line: &str) {
        self.line_len.update(line.chars().count() as u64);
        if line.trim().is_empty() {
            self.empty_lines.inc(1);
        }
    }

    /// The blank line counter
    pub fn empty_lines(&self) -> &Counter {
        &self.empty_lines
    }

    /// The line length distribution
    pub fn line_len(&self) -> &Distribution {
        &self.line_len
    }

    /// Copy out both metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            empty_lines: self.empty_lines.get(),
            line_len: self.line_len.snapshot(),
        }
    }
}

/// Final values of [`LineMetrics`] after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Lines that were blank after trimming
    #[serde(rename = "emptyLines")]
    pub empty_lines: u64,
    /// Distribution of raw line lengths
    #[serde(rename = "lineLenDistro")]
    pub line_len: DistributionSnapshot,
}

impl MetricsSnapshot {
    /// Number of lines observed
    pub fn lines(&self) -> u64 {
        self.line_len.count
    }
}
