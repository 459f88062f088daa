//! Iterative in-place FFT: bit-reversal permutation plus Cooley-Tukey stages.
//!
//! Uses the same twiddle sign and per-stage halving as the recursive
//! transform, so both produce the same samples up to rounding.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::errors::{check_power_of_two, FftError};

/// Transform `data` in place, forward or inverse.
pub fn fft_in_place(data: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
    check_power_of_two(data.len())?;
    fft_in_place_unchecked(data, inverse);
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn fft_in_place_unchecked(data: &mut [Complex64], inverse: bool) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    bit_reverse_permutation(data);

    let sign = if inverse { 1.0 } else { -1.0 };
    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let theta = sign * 2.0 * PI / size as f64;
        // Twiddles for this stage
        let twiddles: Vec<Complex64> = (0..half)
            .map(|j| Complex64::from_polar(1.0, theta * j as f64))
            .collect();

        for start in (0..n).step_by(size) {
            for (j, w) in twiddles.iter().enumerate() {
                // Split to get simultaneous mutable access to [start+j] and [start+j+half]
                let (lo, hi) = data.split_at_mut(start + j + half);
                let u = lo[start + j];
                let t = *w * hi[0];
                let (mut sum, mut diff) = (u + t, u - t);
                if inverse {
                    sum /= 2.0;
                    diff /= 2.0;
                }
                lo[start + j] = sum;
                hi[0] = diff;
            }
        }
        size *= 2;
    }
}

/// Bit-reversal permutation.
fn bit_reverse_permutation(data: &mut [Complex64]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
