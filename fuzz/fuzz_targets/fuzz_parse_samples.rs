#![no_main]

use libfuzzer_sys::fuzz_target;

use fftconv_core::signal::parse_samples;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(samples) = parse_samples(s) {
        assert!(samples.iter().all(|v| v.is_finite()));
    }
});
