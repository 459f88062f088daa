#![no_main]

use libfuzzer_sys::fuzz_target;

use fftconv_core::{convolve, convolve_direct, convolve_with, IterativeFft};

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    // Small integer samples keep the direct sum exact
    let samples: Vec<f64> = rest.iter().map(|&b| f64::from(b as i8)).collect();
    let split = usize::from(split).min(samples.len());
    let (a, b) = samples.split_at(split);

    let expected = convolve_direct(a, b);
    let l1 = |xs: &[f64]| xs.iter().map(|v| v.abs()).sum::<f64>();
    let tol = 1e-9 * (l1(a) * l1(b) + 1.0);

    for got in [convolve(a, b), convolve_with(&IterativeFft, a, b).unwrap()] {
        assert_eq!(got.len(), expected.len());
        for (i, (g, e)) in got.iter().zip(&expected).enumerate() {
            assert!((g - e).abs() <= tol, "sample {i}: {g} vs {e}");
        }
    }
});
