//! Application entry point and dispatch.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use fftconv_bench::io::save_reports;
use fftconv_bench::observer::LoggingObserver;
use fftconv_bench::runner::time;
use fftconv_bench::{run_engines, BenchError, BenchObserver, BenchOptions};
use fftconv_cli::output::write_samples;
use fftconv_cli::{ui, CliPresenter, ProgressBarObserver};
use fftconv_core::constants::DEFAULT_TOLERANCE;
use fftconv_core::engine::select_engines;
use fftconv_core::memory_est::{parse_memory_limit, MemoryEstimate};
use fftconv_core::progress::CancellationToken;
use fftconv_core::signal::parse_samples;
use fftconv_core::{convolve_direct, convolve_with, prefers_direct, DefaultEngineFactory};

use crate::config::AppConfig;
use crate::errors::ConfigError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fftconv_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.verbose && !config.quiet {
        ui::print_header(&full_version());
    }

    match config.inputs() {
        Some((a, b)) => run_convolution(config, a, b),
        None => run_benchmark(config),
    }
}

fn check_memory(config: &AppConfig, la: usize, lb: usize) -> Result<()> {
    let limit = parse_memory_limit(&config.memory_limit).map_err(ConfigError)?;
    let estimate = MemoryEstimate::estimate(la, lb);
    debug!(total_bytes = estimate.total_bytes, ?limit, "memory estimate");
    if !estimate.fits_in(limit) {
        return Err(ConfigError(format!(
            "estimated memory ({} MB) exceeds limit ({} MB)",
            estimate.total_bytes / (1024 * 1024),
            limit.unwrap_or_default() / (1024 * 1024)
        ))
        .into());
    }
    Ok(())
}

fn run_convolution(config: &AppConfig, a: &str, b: &str) -> Result<()> {
    let a = parse_samples(a).context("parsing --a")?;
    let b = parse_samples(b).context("parsing --b")?;
    check_memory(config, a.len(), b.len())?;

    let presenter = CliPresenter::new(config.verbose, config.quiet, config.details);
    let lengths = (a.len(), b.len());

    let outputs: Vec<(&str, Vec<f64>, Duration)> =
        if prefers_direct(a.len(), b.len(), config.direct_threshold) {
            let (c, elapsed) = time(|| convolve_direct(&a, &b));
            vec![("direct", c, elapsed)]
        } else {
            let factory = DefaultEngineFactory::new();
            select_engines(&config.algo, &factory)?
                .iter()
                .map(|engine| -> Result<(&'static str, Vec<f64>, Duration)> {
                    let (c, elapsed) = time(|| convolve_with(engine.as_ref(), &a, &b));
                    Ok((engine.name(), c?, elapsed))
                })
                .collect::<Result<_>>()?
        };

    check_outputs_agree(&outputs)?;

    let shown = if config.quiet { 1 } else { outputs.len() };
    for (method, c, elapsed) in outputs.iter().take(shown) {
        presenter.present_convolution(method, lengths, c, *elapsed);
    }

    if let Some(path) = &config.output {
        if let Some((_, c, _)) = outputs.first() {
            write_samples(path, c).with_context(|| format!("writing {}", path.display()))?;
            if !config.quiet {
                ui::print_success(&format!("Samples written to {}", path.display()));
            }
        }
    }
    Ok(())
}

/// Cross-check engine outputs sample by sample.
fn check_outputs_agree(outputs: &[(&str, Vec<f64>, Duration)]) -> Result<(), BenchError> {
    let Some((first_name, first, _)) = outputs.first() else {
        return Ok(());
    };
    let scale = first.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
    for (name, other, _) in &outputs[1..] {
        let diverged = first
            .iter()
            .zip(other)
            .position(|(x, y)| (x - y).abs() > DEFAULT_TOLERANCE * scale);
        if let Some(i) = diverged {
            return Err(BenchError::Mismatch(format!(
                "{first_name} and {name} differ at sample {i}"
            )));
        }
    }
    Ok(())
}

fn run_benchmark(config: &AppConfig) -> Result<()> {
    let opts = BenchOptions {
        length: config.length,
        iterations: config.iterations,
        warmup: config.warmup,
        algo: config.algo.clone(),
        parallel: config.parallel,
        timeout: Some(config.timeout_duration()?),
    }
    .normalize();

    check_memory(config, opts.length, opts.length)?;

    let factory = DefaultEngineFactory::new();
    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone());

    let observer: Box<dyn BenchObserver> = if config.quiet {
        Box::new(LoggingObserver::new())
    } else {
        Box::new(ProgressBarObserver::new())
    };
    let reports = run_engines(&factory, &opts, &cancel, observer.as_ref())?;

    let presenter = CliPresenter::new(config.verbose, config.quiet, config.details);
    presenter.present_reports(&reports);

    if let Some(path) = &config.output {
        save_reports(&reports, path)?;
        if !config.quiet {
            ui::print_success(&format!("Report written to {}", path.display()));
        }
    }
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        ui::print_warning(&format!("Ctrl+C will not cancel the run: {e}"));
    }
}
