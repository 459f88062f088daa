//! fftconv library: application logic behind the `fftconv` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
