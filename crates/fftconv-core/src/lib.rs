//! # fftconv-core
//!
//! Radix-2 FFT (recursive and iterative) and FFT-based linear convolution
//! of real sequences.

pub mod constants;
pub mod convolve;
pub mod engine;
pub mod errors;
pub mod fft_core;
pub mod fft_recursion;
pub mod memory_est;
pub mod poly;
pub mod progress;
pub mod signal;

// Re-exports
pub use convolve::{
    convolve, convolve_batch, convolve_direct, convolve_with, prefers_direct, smart_convolve,
};
pub use engine::{DefaultEngineFactory, EngineFactory, FftEngine, IterativeFft, RecursiveFft};
pub use errors::FftError;
pub use fft_core::fft_in_place;
pub use fft_recursion::fft;
pub use num_complex::Complex64;
