//! Benchmark options.

use std::time::Duration;

use fftconv_core::constants::{DEFAULT_ENGINE, DEFAULT_ITERATIONS, DEFAULT_LENGTH};

use crate::errors::BenchError;

/// Options for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Length of each synthetic input sequence.
    pub length: usize,
    /// Number of timed convolutions.
    pub iterations: u32,
    /// Untimed convolutions run before measuring.
    pub warmup: u32,
    /// Engine selection: an engine name or `"all"`.
    pub algo: String,
    /// Spread iterations across the rayon pool.
    pub parallel: bool,
    /// Abort once the run exceeds this duration.
    pub timeout: Option<Duration>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            iterations: DEFAULT_ITERATIONS,
            warmup: 0,
            algo: DEFAULT_ENGINE.to_string(),
            parallel: false,
            timeout: None,
        }
    }
}

impl BenchOptions {
    /// Normalize options, applying defaults where values are zero or empty.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.length == 0 {
            self.length = DEFAULT_LENGTH;
        }
        if self.iterations == 0 {
            self.iterations = DEFAULT_ITERATIONS;
        }
        if self.algo.trim().is_empty() {
            self.algo = DEFAULT_ENGINE.to_string();
        }
        self
    }

    /// Reject option combinations the harness cannot run.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.length == 0 {
            return Err(BenchError::InvalidOptions("length must be positive".into()));
        }
        if self.iterations == 0 {
            return Err(BenchError::InvalidOptions(
                "iterations must be positive".into(),
            ));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(BenchError::InvalidOptions("timeout must be positive".into()));
        }
        Ok(())
    }
}
