//! Error type shared by the transform, convolution and engine layers.

/// Errors reported by the FFT and convolution API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// Transform length is not a power of two (zero included).
    #[error("transform length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    /// Two sequences that must be combined elementwise differ in length.
    #[error("length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// No engine is registered under the requested name.
    #[error("unknown FFT engine: {0}")]
    UnknownEngine(String),

    /// A textual sample could not be parsed as a finite number.
    #[error("invalid sample: {0}")]
    InvalidSample(String),
}

/// Check the power-of-two precondition of the radix-2 transforms.
pub(crate) fn check_power_of_two(len: usize) -> Result<(), FftError> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::NotPowerOfTwo { len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_check() {
        assert!(check_power_of_two(1).is_ok());
        assert!(check_power_of_two(1024).is_ok());
        assert_eq!(
            check_power_of_two(0),
            Err(FftError::NotPowerOfTwo { len: 0 })
        );
        assert_eq!(
            check_power_of_two(12),
            Err(FftError::NotPowerOfTwo { len: 12 })
        );
    }

    #[test]
    fn error_display() {
        let err = FftError::NotPowerOfTwo { len: 6 };
        assert_eq!(err.to_string(), "transform length 6 is not a power of two");

        let err = FftError::UnknownEngine("bluestein".into());
        assert_eq!(err.to_string(), "unknown FFT engine: bluestein");

        let err = FftError::LengthMismatch { left: 4, right: 8 };
        assert_eq!(err.to_string(), "length mismatch: 4 != 8");
    }
}
