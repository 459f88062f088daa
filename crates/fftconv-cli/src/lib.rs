//! # fftconv-cli
//!
//! Terminal presentation for the `fftconv` binary: formatting, result
//! presenter, progress bar and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress_bar;
pub mod ui;

pub use presenter::CliPresenter;
pub use progress_bar::ProgressBarObserver;
