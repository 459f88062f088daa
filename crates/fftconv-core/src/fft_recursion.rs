//! Recursive radix-2 FFT.
//!
//! Each level rebuilds the sequence from the transforms of its even- and
//! odd-indexed halves. The inverse path halves every combined sample, so
//! after log2(n) levels the output carries the 1/n normalisation.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::errors::{check_power_of_two, FftError};

/// Transform `data` forward (`inverse == false`) or backward.
///
/// The length must be a power of two; anything else, including an empty
/// slice, is rejected with [`FftError::NotPowerOfTwo`].
///
/// # Example
/// ```
/// use fftconv_core::{fft, Complex64};
///
/// let x = vec![Complex64::new(1.0, 0.0); 4];
/// let spectrum = fft(&x, false).unwrap();
/// assert!((spectrum[0].re - 4.0).abs() < 1e-12);
/// let back = fft(&spectrum, true).unwrap();
/// assert!((back[3].re - 1.0).abs() < 1e-12);
/// ```
pub fn fft(data: &[Complex64], inverse: bool) -> Result<Vec<Complex64>, FftError> {
    check_power_of_two(data.len())?;
    Ok(fft_unchecked(data, inverse))
}

/// Recursive transform without the length check.
///
/// Callers guarantee `data.len()` is a power of two.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn fft_unchecked(data: &[Complex64], inverse: bool) -> Vec<Complex64> {
    let n = data.len();
    if n <= 1 {
        return data.to_vec();
    }

    let half = n / 2;
    let even: Vec<Complex64> = data.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();
    let even = fft_unchecked(&even, inverse);
    let odd = fft_unchecked(&odd, inverse);

    let sign = if inverse { 1.0 } else { -1.0 };
    let theta = sign * 2.0 * PI / n as f64;

    let mut out = vec![Complex64::new(0.0, 0.0); n];
    for i in 0..half {
        let w = Complex64::from_polar(1.0, theta * i as f64);
        let t = w * odd[i];
        let (mut lo, mut hi) = (even[i] + t, even[i] - t);
        if inverse {
            lo /= 2.0;
            hi /= 2.0;
        }
        out[i] = lo;
        out[i + half] = hi;
    }
    out
}
