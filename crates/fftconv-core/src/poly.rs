//! Sequence helpers for FFT convolution: padding, pointwise products and
//! real-part extraction.

use num_complex::Complex64;
use num_traits::Zero;

use crate::errors::FftError;

/// Linear and padded transform lengths for inputs of length `la` and `lb`.
///
/// Returns `(n, m)` with `n = la + lb - 1` and `m` the smallest power of two
/// `>= n`, or `None` when either input is empty.
#[must_use]
pub fn padded_len(la: usize, lb: usize) -> Option<(usize, usize)> {
    if la == 0 || lb == 0 {
        return None;
    }
    let n = la + lb - 1;
    Some((n, n.next_power_of_two()))
}

/// Lift real samples into a zero-padded complex sequence of length `m`.
///
/// Samples beyond `m` are dropped; callers size `m` from [`padded_len`].
#[must_use]
pub fn to_complex_padded(samples: &[f64], m: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::zero(); m];
    for (dst, &src) in out.iter_mut().zip(samples) {
        dst.re = src;
    }
    out
}

/// Elementwise complex product.
pub fn pointwise_multiply(a: &[Complex64], b: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(ai, bi)| ai * bi).collect())
}

/// Keep the real part of the first `n` samples.
///
/// The imaginary residue of an inverse transform of a real product is
/// rounding noise and is discarded.
#[must_use]
pub fn real_parts(data: &[Complex64], n: usize) -> Vec<f64> {
    data.iter().take(n).map(|c| c.re).collect()
}
