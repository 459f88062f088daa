//! # fftconv-bench
//!
//! Repeated-convolution timing harness, benchmark statistics and JSON
//! reports.

pub mod errors;
pub mod harness;
pub mod io;
pub mod observer;
pub mod options;
pub mod report;
pub mod runner;

pub use errors::BenchError;
pub use harness::{run_benchmark, run_engines};
pub use observer::{BenchObserver, NoOpObserver};
pub use options::BenchOptions;
pub use report::BenchReport;
