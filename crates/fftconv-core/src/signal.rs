//! Synthetic inputs and sample parsing.

use std::f64::consts::PI;

use crate::errors::FftError;

/// One period of a sine sampled at `n` points: `sin(2*pi*i/n)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sine(n: usize) -> Vec<f64> {
    (0..n).map(|i| (2.0 * PI * i as f64 / n as f64).sin()).collect()
}

/// One period of a cosine sampled at `n` points: `cos(2*pi*i/n)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cosine(n: usize) -> Vec<f64> {
    (0..n).map(|i| (2.0 * PI * i as f64 / n as f64).cos()).collect()
}

/// Parse a list of samples separated by commas and/or whitespace.
///
/// Non-finite values are rejected.
///
/// ```
/// use fftconv_core::signal::parse_samples;
///
/// assert_eq!(parse_samples("1, 2.5 -3").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(parse_samples("1,x").is_err());
/// ```
pub fn parse_samples(s: &str) -> Result<Vec<f64>, FftError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| match tok.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(FftError::InvalidSample(tok.to_string())),
        })
        .collect()
}
