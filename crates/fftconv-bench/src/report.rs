//! Benchmark report (serializable).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::runner::BenchmarkResult;

/// Current report format version.
pub const REPORT_VERSION: u32 = 1;

/// Outcome of benchmarking one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Report format version for compatibility checking.
    pub version: u32,
    /// Engine name.
    pub engine: String,
    /// Length of each input sequence.
    pub length: usize,
    /// Number of timed convolutions.
    pub iterations: u32,
    /// Whether iterations ran on the rayon pool.
    pub parallel: bool,
    /// Sum of per-iteration times truncated to milliseconds.
    pub total_ms: u64,
    /// Wall-clock time of the whole run.
    pub wall_ns: u64,
    pub mean_ns: u64,
    pub median_ns: u64,
    pub min_ns: u64,
    pub max_ns: u64,
    /// Sample `C[length / 2]` of the last convolution.
    pub probe: f64,
    /// CPU model the run executed on.
    pub cpu_model: String,
    /// Number of CPU cores.
    pub num_cores: usize,
    /// Run timestamp.
    pub timestamp: String,
}

impl BenchReport {
    /// Build a report from summarised timings.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(
        stats: &BenchmarkResult,
        length: usize,
        parallel: bool,
        total_ms: u64,
        wall: Duration,
        probe: f64,
    ) -> Self {
        let (cpu_model, num_cores) = cpu_info();
        Self {
            version: REPORT_VERSION,
            engine: stats.name.clone(),
            length,
            iterations: stats.iterations,
            parallel,
            total_ms,
            wall_ns: wall.as_nanos() as u64,
            mean_ns: stats.mean.as_nanos() as u64,
            median_ns: stats.median.as_nanos() as u64,
            min_ns: stats.min.as_nanos() as u64,
            max_ns: stats.max.as_nanos() as u64,
            probe,
            cpu_model,
            num_cores,
            timestamp: current_timestamp(),
        }
    }

    #[must_use]
    pub fn mean(&self) -> Duration {
        Duration::from_nanos(self.mean_ns)
    }

    #[must_use]
    pub fn median(&self) -> Duration {
        Duration::from_nanos(self.median_ns)
    }

    #[must_use]
    pub fn wall(&self) -> Duration {
        Duration::from_nanos(self.wall_ns)
    }
}

/// CPU model string and logical core count, read from one `sysinfo`
/// snapshot.
#[must_use]
pub fn cpu_info() -> (String, usize) {
    use sysinfo::System;
    let sys = System::new_all();
    let model = sys
        .cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default();
    (model, sys.cpus().len().max(1))
}

/// Get the current timestamp as seconds since the Unix epoch.
#[must_use]
pub fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
