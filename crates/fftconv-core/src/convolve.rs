//! Linear convolution of real sequences.
//!
//! `convolve` realises the linear convolution as a circular one of padded
//! length `m >= la + lb - 1`, which leaves no wrap-around aliasing. Small
//! inputs can be routed to the direct sum through [`smart_convolve`].

use rayon::prelude::*;
use tracing::debug;

use crate::engine::FftEngine;
use crate::errors::FftError;
use crate::fft_recursion::fft_unchecked;
use crate::poly::{padded_len, pointwise_multiply, real_parts, to_complex_padded};

/// Convolve `a` with `b` using the recursive FFT.
///
/// The result has `a.len() + b.len() - 1` samples, or none when either
/// input is empty.
///
/// # Example
/// ```
/// let c = fftconv_core::convolve(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
/// let expected = [0.0, 1.0, 2.5, 4.0, 1.5];
/// for (got, want) in c.iter().zip(expected) {
///     assert!((got - want).abs() < 1e-9);
/// }
/// ```
#[must_use]
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let Some((n, m)) = padded_len(a.len(), b.len()) else {
        return Vec::new();
    };
    debug!(la = a.len(), lb = b.len(), padded = m, "fft convolution");

    let fa = fft_unchecked(&to_complex_padded(a, m), false);
    let fb = fft_unchecked(&to_complex_padded(b, m), false);
    let fc: Vec<_> = fa.iter().zip(&fb).map(|(x, y)| x * y).collect();
    let c = fft_unchecked(&fc, true);

    real_parts(&c, n)
}

/// Convolve `a` with `b` through an explicit engine.
pub fn convolve_with(engine: &dyn FftEngine, a: &[f64], b: &[f64]) -> Result<Vec<f64>, FftError> {
    let Some((n, m)) = padded_len(a.len(), b.len()) else {
        return Ok(Vec::new());
    };
    debug!(
        engine = engine.name(),
        la = a.len(),
        lb = b.len(),
        padded = m,
        "fft convolution"
    );

    let fa = engine.transform(&to_complex_padded(a, m), false)?;
    let fb = engine.transform(&to_complex_padded(b, m), false)?;
    let fc = pointwise_multiply(&fa, &fb)?;
    let c = engine.transform(&fc, true)?;

    Ok(real_parts(&c, n))
}

/// Direct O(la * lb) convolution; the reference the FFT path is checked
/// against.
#[must_use]
pub fn convolve_direct(a: &[f64], b: &[f64]) -> Vec<f64> {
    let Some((n, _)) = padded_len(a.len(), b.len()) else {
        return Vec::new();
    };
    let mut out = vec![0.0; n];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

/// Whether inputs of length `la` and `lb` take the direct sum under
/// `threshold`. A threshold of 0 keeps every nonempty input on the FFT.
#[must_use]
pub fn prefers_direct(la: usize, lb: usize, threshold: usize) -> bool {
    la.min(lb) <= threshold
}

/// Convolve directly when the shorter input has at most `threshold`
/// samples, otherwise through the FFT.
#[must_use]
pub fn smart_convolve(a: &[f64], b: &[f64], threshold: usize) -> Vec<f64> {
    if prefers_direct(a.len(), b.len(), threshold) {
        convolve_direct(a, b)
    } else {
        convolve(a, b)
    }
}

/// Convolve independent pairs in parallel, one invocation per pair.
#[must_use]
pub fn convolve_batch(pairs: &[(Vec<f64>, Vec<f64>)]) -> Vec<Vec<f64>> {
    pairs.par_iter().map(|(a, b)| convolve(a, b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{IterativeFft, RecursiveFft};

    fn assert_close(got: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(got.len(), expected.len(), "length mismatch");
        for (i, (g, e)) in got.iter().zip(expected).enumerate() {
            assert!((g - e).abs() < tol, "Mismatch at index {i}: {g} vs {e}");
        }
    }

    #[test]
    fn polynomial_product() {
        let c = convolve(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]);
        assert_close(&c, &[0.0, 1.0, 2.5, 4.0, 1.5], 1e-9);
    }

    #[test]
    fn unit_impulse_is_identity() {
        let a = [3.0, -1.0, 4.0, 1.0, -5.0, 9.0];
        assert_close(&convolve(&a, &[1.0]), &a, 1e-12);
        assert_close(&convolve(&[1.0], &a), &a, 1e-12);
    }

    #[test]
    fn single_samples() {
        assert_close(&convolve(&[2.0], &[-3.5]), &[-7.0], 1e-12);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(convolve(&[], &[1.0, 2.0]).is_empty());
        assert!(convolve(&[1.0], &[]).is_empty());
        assert!(convolve_direct(&[], &[]).is_empty());
        assert!(convolve_with(&RecursiveFft, &[], &[1.0]).unwrap().is_empty());
    }

    #[test]
    fn exact_power_of_two_length() {
        // n = 4 + 5 - 1 = 8, so no padding beyond the linear length
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 0.0, -1.0, 0.0, 2.0];
        assert_close(&convolve(&a, &b), &convolve_direct(&a, &b), 1e-9);
    }

    #[test]
    fn engines_match_direct() {
        let a: Vec<f64> = (0..37).map(|i| (f64::from(i) * 0.37).sin()).collect();
        let b: Vec<f64> = (0..21).map(|i| (f64::from(i) * 0.11).cos()).collect();
        let expected = convolve_direct(&a, &b);
        assert_close(&convolve_with(&RecursiveFft, &a, &b).unwrap(), &expected, 1e-9);
        assert_close(&convolve_with(&IterativeFft, &a, &b).unwrap(), &expected, 1e-9);
    }

    #[test]
    fn smart_convolve_routes_both_ways() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.0, 1.0, 0.5];
        let expected = [0.0, 1.0, 2.5, 4.0, 1.5];
        assert_close(&smart_convolve(&a, &b, 8), &expected, 1e-12);
        assert_close(&smart_convolve(&a, &b, 0), &expected, 1e-9);
    }

    #[test]
    fn direct_routing_predicate() {
        assert!(prefers_direct(3, 100, 3));
        assert!(!prefers_direct(4, 100, 3));
        assert!(!prefers_direct(1, 1, 0));
        assert!(prefers_direct(0, 5, 0));
    }

    #[test]
    fn batch_matches_sequential() {
        let pairs: Vec<(Vec<f64>, Vec<f64>)> = (1..6)
            .map(|k| {
                let a: Vec<f64> = (0..k * 3).map(f64::from).collect();
                let b: Vec<f64> = (0..k).map(|i| f64::from(i) - 1.0).collect();
                (a, b)
            })
            .collect();
        let batch = convolve_batch(&pairs);
        assert_eq!(batch.len(), pairs.len());
        for ((a, b), got) in pairs.iter().zip(&batch) {
            assert_close(got, &convolve(a, b), 1e-12);
        }
    }
}
