//! Progress observers for benchmark runs.

use fftconv_core::constants::PROGRESS_REPORT_THRESHOLD;
use fftconv_core::progress::fraction;
use tracing::debug;

/// Receives per-iteration progress from the harness.
pub trait BenchObserver: Send + Sync {
    /// Called once before the first timed iteration.
    fn on_start(&self, _engine: &str, _total: u64) {}

    /// Called after each timed iteration.
    fn on_iteration(&self, engine: &str, done: u64, total: u64);

    /// Called when an engine's run completes.
    fn on_finish(&self, _engine: &str) {}
}

/// Observer that ignores all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BenchObserver for NoOpObserver {
    fn on_iteration(&self, _engine: &str, _done: u64, _total: u64) {}
}

/// Observer that logs progress at debug level, throttled to 1% steps.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    last_reported: std::sync::atomic::AtomicU64,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BenchObserver for LoggingObserver {
    fn on_start(&self, _engine: &str, _total: u64) {
        use std::sync::atomic::Ordering;

        self.last_reported.store(0.0_f64.to_bits(), Ordering::Relaxed);
    }

    fn on_iteration(&self, engine: &str, done: u64, total: u64) {
        use std::sync::atomic::Ordering;

        let progress = fraction(done, total);
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if done == total || progress - last >= PROGRESS_REPORT_THRESHOLD {
            self.last_reported.store(progress.to_bits(), Ordering::Relaxed);
            debug!(engine, done, total, "benchmark progress");
        }
    }
}
