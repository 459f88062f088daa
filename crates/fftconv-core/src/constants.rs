//! Defaults for the benchmark harness and convolution routing.

/// Default length of the synthetic sine/cosine sequences.
pub const DEFAULT_LENGTH: usize = 1000;

/// Default number of timed convolutions in a benchmark run.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Default engine name.
pub const DEFAULT_ENGINE: &str = "recursive";

/// Minimum progress change (1%) before reporting an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Absolute tolerance used when comparing transform outputs in tests and
/// cross-engine checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Benchmark timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Engines produced diverging results.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
