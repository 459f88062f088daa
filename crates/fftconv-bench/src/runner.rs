//! Timing primitives and duration statistics.

use std::time::{Duration, Instant};

/// Time a single call, returning its result and elapsed time.
pub fn time<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Summarise a set of per-iteration durations.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn summarize(durations: &[Duration]) -> BenchmarkResult {
    let mut sorted = durations.to_vec();
    sorted.sort();
    let min = sorted.first().copied().unwrap_or_default();
    let max = sorted.last().copied().unwrap_or_default();
    let median = match sorted.len() {
        0 => Duration::ZERO,
        len if len % 2 == 1 => sorted[len / 2],
        len => (sorted[len / 2 - 1] + sorted[len / 2]) / 2,
    };
    let total: Duration = sorted.iter().sum();
    let iterations = sorted.len() as u32;
    let mean = if iterations == 0 {
        Duration::ZERO
    } else {
        total / iterations
    };

    BenchmarkResult {
        name: String::new(),
        total,
        mean,
        median,
        min,
        max,
        iterations,
    }
}

/// Sum of per-iteration times truncated to whole milliseconds.
///
/// This is the "Total duration" figure of the benchmark output; iterations
/// shorter than a millisecond contribute 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn total_truncated_ms(durations: &[Duration]) -> u64 {
    durations.iter().map(|d| d.as_millis() as u64).sum()
}

/// Result of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub name: String,
    pub total: Duration,
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub iterations: u32,
}

impl BenchmarkResult {
    /// Create a named result.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
