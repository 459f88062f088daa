//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Decimal places kept when printing convolution samples.
pub const SAMPLE_PRECISION: usize = 6;

/// Sequences longer than this are elided unless verbose.
const MAX_SHOWN: usize = 16;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let rest = secs - (mins as f64 * 60.0);
        format!("{mins}m{rest:.1}s")
    }
}

/// Format an integer with thousands separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format one sample with at most [`SAMPLE_PRECISION`] decimals, trailing
/// zeros removed.
#[must_use]
pub fn format_sample(v: f64) -> String {
    let s = format!("{v:.SAMPLE_PRECISION$}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    // Rounding noise can leave "-0"
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Format a sequence as `[a, b, c]`, eliding the middle of long sequences
/// unless `verbose`.
#[must_use]
pub fn format_samples(values: &[f64], verbose: bool) -> String {
    let join = |xs: &[f64]| {
        xs.iter()
            .map(|&v| format_sample(v))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if verbose || values.len() <= MAX_SHOWN {
        return format!("[{}]", join(values));
    }
    let half = MAX_SHOWN / 2;
    format!(
        "[{}, ..., {}] ({} samples)",
        join(&values[..half]),
        join(&values[values.len() - half..]),
        format_number(values.len() as u64)
    )
}

/// Write samples to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_samples(path: &Path, values: &[f64]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for v in values {
        writeln!(file, "{v}")?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).ends_with("µs"));
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
        assert_eq!(format_duration(Duration::from_millis(3250)), "3.250s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn format_sample_trims() {
        assert_eq!(format_sample(2.5), "2.5");
        assert_eq!(format_sample(4.0), "4");
        assert_eq!(format_sample(2.499_999_999_999_6), "2.5");
        assert_eq!(format_sample(-1e-17), "0");
        assert_eq!(format_sample(-3.25), "-3.25");
    }

    #[test]
    fn format_short_sequence() {
        assert_eq!(
            format_samples(&[0.0, 1.0, 2.5, 4.0, 1.5], false),
            "[0, 1, 2.5, 4, 1.5]"
        );
        assert_eq!(format_samples(&[], false), "[]");
    }

    #[test]
    fn format_long_sequence_elided() {
        let values: Vec<f64> = (0..1999).map(f64::from).collect();
        let s = format_samples(&values, false);
        assert!(s.starts_with("[0, 1, 2"));
        assert!(s.contains("..."));
        assert!(s.ends_with("(1,999 samples)"));
        assert!(!format_samples(&values, true).contains("..."));
    }

    #[test]
    fn write_samples_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.txt");
        write_samples(&path, &[1.0, 2.5]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2.5\n");
    }
}
