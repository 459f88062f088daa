//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use fftconv_core::constants::{DEFAULT_ENGINE, DEFAULT_ITERATIONS, DEFAULT_LENGTH};

use crate::errors::ConfigError;

/// Convolve two real sequences with a radix-2 FFT, or benchmark repeated
/// sine/cosine convolutions.
#[derive(Parser, Debug)]
#[command(name = "fftconv", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// First input sequence for a one-shot convolution (e.g. "1,2,3").
    #[arg(long, requires = "b", allow_hyphen_values = true)]
    pub a: Option<String>,

    /// Second input sequence for a one-shot convolution.
    #[arg(long, requires = "a", allow_hyphen_values = true)]
    pub b: Option<String>,

    /// Use the direct sum when the shorter input has at most this many
    /// samples (0 always uses the FFT).
    #[arg(long, default_value_t = 0)]
    pub direct_threshold: usize,

    /// Length of the benchmark's sine and cosine sequences.
    #[arg(short = 'n', long, default_value_t = DEFAULT_LENGTH, env = "FFTCONV_N")]
    pub length: usize,

    /// Number of timed convolutions.
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS, env = "FFTCONV_ITERATIONS")]
    pub iterations: u32,

    /// Untimed convolutions before measuring.
    #[arg(long, default_value_t = 0)]
    pub warmup: u32,

    /// FFT engine: recursive, iterative, or all.
    #[arg(long, default_value = DEFAULT_ENGINE)]
    pub algo: String,

    /// Run benchmark iterations in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Benchmark timeout (e.g., "5m", "30s", "500ms").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Output file: JSON report in benchmark mode, samples otherwise.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only the essential result).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (full sequences, version header).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the timeout string into a `Duration`.
    pub fn timeout_duration(&self) -> Result<Duration, ConfigError> {
        parse_duration(&self.timeout)
            .ok_or_else(|| ConfigError(format!("invalid timeout: {:?}", self.timeout)))
    }

    /// Whether a one-shot convolution was requested.
    #[must_use]
    pub fn inputs(&self) -> Option<(&str, &str)> {
        self.a.as_deref().zip(self.b.as_deref())
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms" or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        ms.parse().ok().map(Duration::from_millis)
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse().ok().map(Duration::from_secs)
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        n.checked_mul(60).map(Duration::from_secs)
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        n.checked_mul(3600).map(Duration::from_secs)
    } else {
        s.parse().ok().map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration(" 45 "), Some(Duration::from_secs(45)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("1ms"), Some(Duration::from_millis(1)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
    }

    #[test]
    fn parse_duration_invalid() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("m"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn parse_duration_overflow() {
        assert_eq!(parse_duration("999999999999999999m"), None);
        assert_eq!(parse_duration("999999999999999999h"), None);
        assert_eq!(
            parse_duration("18446744073709551615s"),
            Some(Duration::from_secs(u64::MAX))
        );
    }

    #[test]
    fn oversized_timeout_is_config_error() {
        let config =
            AppConfig::try_parse_from(["fftconv", "--timeout", "999999999999999999h"]).unwrap();
        assert!(config.timeout_duration().is_err());
    }

    #[test]
    fn defaults_match_benchmark_constants() {
        let config = AppConfig::try_parse_from(["fftconv"]).unwrap();
        assert_eq!(config.length, 1000);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.algo, "recursive");
        assert_eq!(config.timeout_duration().unwrap(), Duration::from_secs(300));
        assert!(config.inputs().is_none());
    }

    #[test]
    fn one_shot_inputs() {
        let config =
            AppConfig::try_parse_from(["fftconv", "--a", "1,2,3", "--b", "-1 0.5"]).unwrap();
        assert_eq!(config.inputs(), Some(("1,2,3", "-1 0.5")));
    }

    #[test]
    fn one_shot_requires_both_inputs() {
        assert!(AppConfig::try_parse_from(["fftconv", "--a", "1,2"]).is_err());
    }

    #[test]
    fn invalid_timeout_is_config_error() {
        let config = AppConfig::try_parse_from(["fftconv", "--timeout", "later"]).unwrap();
        assert!(config.timeout_duration().is_err());
    }
}
