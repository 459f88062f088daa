//! Error handling and exit codes.

use fftconv_bench::BenchError;
use fftconv_core::constants::exit_codes;
use fftconv_core::FftError;

/// Invalid command-line configuration.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConfigError(pub String);

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<BenchError>() {
        e.exit_code()
    } else if let Some(e) = err.downcast_ref::<FftError>() {
        BenchError::Fft(e.clone()).exit_code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}
