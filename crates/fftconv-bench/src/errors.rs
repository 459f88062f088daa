//! Benchmark error type.

use fftconv_core::constants::exit_codes;
use fftconv_core::FftError;

/// Errors raised while running or persisting a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The transform or convolution layer rejected its input.
    #[error(transparent)]
    Fft(#[from] FftError),

    /// Run was cancelled between iterations.
    #[error("benchmark cancelled")]
    Cancelled,

    /// Run exceeded its time budget.
    #[error("benchmark timed out after {0}")]
    Timeout(String),

    /// Options failed validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Engines produced diverging results.
    #[error("engine results diverge: {0}")]
    Mismatch(String),

    /// Report file could not be written.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialised.
    #[error("report serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BenchError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fft(FftError::UnknownEngine(_) | FftError::InvalidSample(_))
            | Self::InvalidOptions(_) => exit_codes::ERROR_CONFIG,
            Self::Cancelled => exit_codes::ERROR_CANCELED,
            Self::Timeout(_) => exit_codes::ERROR_TIMEOUT,
            Self::Mismatch(_) => exit_codes::ERROR_MISMATCH,
            Self::Fft(_) | Self::Io(_) | Self::Serialize(_) => exit_codes::ERROR_GENERIC,
        }
    }
}
