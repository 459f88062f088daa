//! Repeated-convolution benchmark over synthetic sine/cosine inputs.
//!
//! Every iteration regenerates `A[i] = sin(2*pi*i/N)` and
//! `B[i] = cos(2*pi*i/N)`, convolves them and records the elapsed time of
//! generation plus convolution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{info, warn};

use fftconv_core::constants::DEFAULT_TOLERANCE;
use fftconv_core::convolve::convolve_with;
use fftconv_core::engine::{select_engines, EngineFactory, FftEngine};
use fftconv_core::progress::CancellationToken;
use fftconv_core::signal::{cosine, sine};

use crate::errors::BenchError;
use crate::observer::BenchObserver;
use crate::options::BenchOptions;
use crate::report::BenchReport;
use crate::runner::{summarize, time, total_truncated_ms};

/// One timed iteration: generate inputs, convolve, return the probe sample.
fn iteration(engine: &dyn FftEngine, length: usize) -> Result<f64, BenchError> {
    let a = sine(length);
    let b = cosine(length);
    let c = convolve_with(engine, &a, &b)?;
    Ok(c.get(length / 2).copied().unwrap_or_default())
}

fn check_budget(
    cancel: &CancellationToken,
    started: Instant,
    timeout: Option<Duration>,
) -> Result<(), BenchError> {
    if cancel.is_cancelled() {
        return Err(BenchError::Cancelled);
    }
    if let Some(limit) = timeout {
        if started.elapsed() > limit {
            return Err(BenchError::Timeout(format!("{limit:?}")));
        }
    }
    Ok(())
}

type Sample = (f64, Duration);

fn run_sequential(
    engine: &dyn FftEngine,
    opts: &BenchOptions,
    cancel: &CancellationToken,
    observer: &dyn BenchObserver,
    started: Instant,
) -> Result<Vec<Sample>, BenchError> {
    let total = u64::from(opts.iterations);
    let mut samples = Vec::with_capacity(opts.iterations as usize);
    for i in 0..total {
        check_budget(cancel, started, opts.timeout)?;
        let (probe, elapsed) = time(|| iteration(engine, opts.length));
        samples.push((probe?, elapsed));
        observer.on_iteration(engine.name(), i + 1, total);
    }
    Ok(samples)
}

/// Iterations are independent, so they spread across the rayon pool; the
/// collected samples keep iteration order.
fn run_parallel(
    engine: &dyn FftEngine,
    opts: &BenchOptions,
    cancel: &CancellationToken,
    observer: &dyn BenchObserver,
    started: Instant,
) -> Result<Vec<Sample>, BenchError> {
    let total = u64::from(opts.iterations);
    let done = AtomicU64::new(0);
    (0..opts.iterations)
        .into_par_iter()
        .map(|_| -> Result<Sample, BenchError> {
            check_budget(cancel, started, opts.timeout)?;
            let (probe, elapsed) = time(|| iteration(engine, opts.length));
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            observer.on_iteration(engine.name(), finished, total);
            Ok((probe?, elapsed))
        })
        .collect()
}

/// Benchmark a single engine.
pub fn run_benchmark(
    engine: &dyn FftEngine,
    opts: &BenchOptions,
    cancel: &CancellationToken,
    observer: &dyn BenchObserver,
) -> Result<BenchReport, BenchError> {
    opts.validate()?;
    let total = u64::from(opts.iterations);

    for _ in 0..opts.warmup {
        iteration(engine, opts.length)?;
    }

    info!(
        engine = engine.name(),
        length = opts.length,
        iterations = opts.iterations,
        parallel = opts.parallel,
        "benchmark started"
    );
    observer.on_start(engine.name(), total);
    let started = Instant::now();

    let outcome = if opts.parallel {
        run_parallel(engine, opts, cancel, observer, started)
    } else {
        run_sequential(engine, opts, cancel, observer, started)
    };
    let samples =
        outcome.inspect_err(|e| warn!(engine = engine.name(), error = %e, "benchmark aborted"))?;

    let wall = started.elapsed();
    observer.on_finish(engine.name());

    let durations: Vec<Duration> = samples.iter().map(|&(_, d)| d).collect();
    let probe = samples.last().map_or(0.0, |&(p, _)| p);
    let stats = summarize(&durations).with_name(engine.name());
    let report = BenchReport::new(
        &stats,
        opts.length,
        opts.parallel,
        total_truncated_ms(&durations),
        wall,
        probe,
    );
    info!(
        engine = engine.name(),
        total_ms = report.total_ms,
        median = ?stats.median,
        "benchmark finished"
    );
    Ok(report)
}

/// Benchmark every engine selected by `opts.algo` and cross-check their
/// probe samples.
pub fn run_engines(
    factory: &dyn EngineFactory,
    opts: &BenchOptions,
    cancel: &CancellationToken,
    observer: &dyn BenchObserver,
) -> Result<Vec<BenchReport>, BenchError> {
    let engines = select_engines(&opts.algo, factory)?;
    let reports = engines
        .iter()
        .map(|engine| run_benchmark(engine.as_ref(), opts, cancel, observer))
        .collect::<Result<Vec<_>, _>>()?;
    verify_agreement(&reports)?;
    Ok(reports)
}

/// Check that all reports carry the same probe sample within tolerance.
pub fn verify_agreement(reports: &[BenchReport]) -> Result<(), BenchError> {
    let Some(first) = reports.first() else {
        return Ok(());
    };
    for other in &reports[1..] {
        let scale = first.probe.abs().max(1.0);
        if (other.probe - first.probe).abs() > DEFAULT_TOLERANCE * scale {
            return Err(BenchError::Mismatch(format!(
                "{} probe {} != {} probe {}",
                first.engine, first.probe, other.engine, other.probe
            )));
        }
    }
    Ok(())
}
