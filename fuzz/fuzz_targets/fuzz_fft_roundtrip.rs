#![no_main]

use libfuzzer_sys::fuzz_target;

use fftconv_core::{fft, fft_in_place, Complex64};

fuzz_target!(|data: &[u8]| {
    let mut x: Vec<Complex64> = data
        .chunks(2)
        .map(|c| {
            let re = f64::from(c[0] as i8);
            let im = c.get(1).map_or(0.0, |&b| f64::from(b as i8));
            Complex64::new(re, im)
        })
        .collect();
    if x.is_empty() {
        assert!(fft(&x, false).is_err());
        return;
    }
    let n = x.len();
    if !n.is_power_of_two() {
        assert!(fft(&x, false).is_err());
        x.resize(n.next_power_of_two(), Complex64::new(0.0, 0.0));
    }

    let peak = x.iter().map(|c| c.norm()).fold(1.0_f64, f64::max);
    let tol = 1e-9 * peak * x.len() as f64;

    let spectrum = fft(&x, false).unwrap();
    let back = fft(&spectrum, true).unwrap();

    let mut iterative = spectrum.clone();
    fft_in_place(&mut iterative, true).unwrap();

    for i in 0..x.len() {
        assert!((back[i] - x[i]).norm() <= tol, "recursive roundtrip at {i}");
        assert!((iterative[i] - x[i]).norm() <= tol, "iterative inverse at {i}");
    }
});
