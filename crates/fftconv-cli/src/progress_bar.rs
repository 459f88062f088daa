//! Terminal progress bar fed by benchmark iterations.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use fftconv_bench::BenchObserver;

const TEMPLATE: &str = "{msg:>10} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Observer drawing one indicatif bar per engine run.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Bar drawn to stderr; indicatif skips drawing when stderr is not a
    /// terminal.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    /// Current position, for tests and summaries.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchObserver for ProgressBarObserver {
    fn on_start(&self, engine: &str, total: u64) {
        self.bar.reset();
        self.bar.set_length(total);
        self.bar.set_message(engine.to_string());
    }

    fn on_iteration(&self, _engine: &str, done: u64, _total: u64) {
        // Parallel iterations can report out of order
        if done > self.bar.position() {
            self.bar.set_position(done);
        }
    }

    fn on_finish(&self, _engine: &str) {
        self.bar.finish_and_clear();
    }
}
