//! Criterion benchmarks for FFT convolution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fftconv_core::convolve::{convolve, convolve_direct, convolve_with, smart_convolve};
use fftconv_core::engine::{FftEngine, IterativeFft, RecursiveFft};
use fftconv_core::signal::{cosine, sine};

const DIRECT_THRESHOLD: usize = 32;

fn bench_convolution(c: &mut Criterion) {
    let lengths: Vec<usize> = vec![64, 256, 1_000, 4_096];

    let mut group = c.benchmark_group("RecursiveFft");
    for &n in &lengths {
        let (a, b) = (sine(n), cosine(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| convolve(black_box(&a), black_box(&b)));
        });
    }
    group.finish();

    let iterative: &dyn FftEngine = &IterativeFft;
    let mut group = c.benchmark_group("IterativeFft");
    for &n in &lengths {
        let (a, b) = (sine(n), cosine(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| convolve_with(iterative, black_box(&a), black_box(&b)).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Direct");
    for &n in &lengths[..3] {
        let (a, b) = (sine(n), cosine(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| convolve_direct(black_box(&a), black_box(&b)));
        });
    }
    group.finish();

    let recursive: &dyn FftEngine = &RecursiveFft;
    c.bench_function("RecursiveFft/engine/1000", |bench| {
        let (a, b) = (sine(1_000), cosine(1_000));
        bench.iter(|| convolve_with(recursive, black_box(&a), black_box(&b)).unwrap());
    });

    // Short kernels against a long signal, either side of the direct threshold
    let mut group = c.benchmark_group("Smart");
    let signal = sine(4_096);
    for k in [8, DIRECT_THRESHOLD, 2 * DIRECT_THRESHOLD, 256] {
        let kernel = cosine(k);
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |bench, _| {
            bench.iter(|| {
                smart_convolve(
                    black_box(&signal),
                    black_box(&kernel),
                    DIRECT_THRESHOLD,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convolution);
criterion_main!(benches);
