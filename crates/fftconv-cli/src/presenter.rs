//! Result presenter for convolutions and benchmark reports.
//!
//! Errors go through [`crate::ui::print_error`].

use std::time::Duration;

use fftconv_bench::BenchReport;

use crate::output::{format_duration, format_number, format_sample, format_samples};

/// Presents results on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
    details: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, details: bool) -> Self {
        Self {
            verbose,
            quiet,
            details,
        }
    }

    /// Render a one-shot convolution result.
    #[must_use]
    pub fn render_convolution(
        &self,
        method: &str,
        lengths: (usize, usize),
        result: &[f64],
        duration: Duration,
    ) -> String {
        if self.quiet {
            return result
                .iter()
                .map(|&v| format_sample(v))
                .collect::<Vec<_>>()
                .join(" ");
        }

        let mut lines = vec![format!("Method: {method}")];
        if self.details {
            let (la, lb) = lengths;
            lines.push(format!("Lengths: {la} * {lb} -> {}", result.len()));
        }
        lines.push(format!("Duration: {}", format_duration(duration)));
        lines.push(format!("C = {}", format_samples(result, self.verbose)));
        lines.join("\n")
    }

    /// Render one engine's benchmark report.
    #[must_use]
    pub fn render_report(&self, report: &BenchReport) -> String {
        let total = format!("Total duration: {}ms", report.total_ms);
        if self.quiet {
            return total;
        }

        let mut lines = vec![
            format!("Engine: {}", report.engine),
            format!(
                "N: {}, iterations: {}{}",
                format_number(report.length as u64),
                format_number(u64::from(report.iterations)),
                if report.parallel { " (parallel)" } else { "" }
            ),
            total,
            format!(
                "Median: {}  Mean: {}",
                format_duration(report.median()),
                format_duration(report.mean())
            ),
        ];
        if self.details {
            lines.push(format!(
                "Min: {}  Max: {}  Wall: {}",
                format_duration(Duration::from_nanos(report.min_ns)),
                format_duration(Duration::from_nanos(report.max_ns)),
                format_duration(report.wall())
            ));
            lines.push(format!("C[N/2] = {}", format_sample(report.probe)));
            lines.push(format!(
                "CPU: {} ({} cores)",
                report.cpu_model, report.num_cores
            ));
        }
        lines.join("\n")
    }

    /// Render a side-by-side table of several engines, fastest median first.
    #[must_use]
    pub fn render_comparison(&self, reports: &[BenchReport]) -> Option<String> {
        if self.quiet || reports.len() < 2 {
            return None;
        }
        let mut sorted: Vec<&BenchReport> = reports.iter().collect();
        sorted.sort_by_key(|r| r.median_ns);

        let mut lines = vec!["Comparison:".to_string(), format!("{:-<48}", "")];
        for r in sorted {
            lines.push(format!(
                "  {:<12} {:>12} {:>12}",
                r.engine,
                format!("{}ms", r.total_ms),
                format_duration(r.median())
            ));
        }
        Some(lines.join("\n"))
    }

    pub fn present_convolution(
        &self,
        method: &str,
        lengths: (usize, usize),
        result: &[f64],
        duration: Duration,
    ) {
        println!(
            "{}",
            self.render_convolution(method, lengths, result, duration)
        );
    }

    pub fn present_reports(&self, reports: &[BenchReport]) {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 && !self.quiet {
                println!();
            }
            println!("{}", self.render_report(report));
        }
        if let Some(table) = self.render_comparison(reports) {
            println!("\n{table}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fftconv_bench::runner::summarize;

    fn report(engine: &str, median_ms: u64) -> BenchReport {
        let durations = [
            Duration::from_millis(median_ms),
            Duration::from_millis(median_ms),
            Duration::from_millis(median_ms + 2),
        ];
        let stats = summarize(&durations).with_name(engine);
        BenchReport::new(
            &stats,
            1000,
            false,
            3 * median_ms + 2,
            Duration::from_millis(3 * median_ms + 2),
            -250.0,
        )
    }

    #[test]
    fn quiet_report_is_total_line() {
        let p = CliPresenter::new(false, true, false);
        assert_eq!(p.render_report(&report("recursive", 2)), "Total duration: 8ms");
    }

    #[test]
    fn normal_report_fields() {
        let p = CliPresenter::new(false, false, false);
        let s = p.render_report(&report("iterative", 1));
        assert!(s.contains("Engine: iterative"));
        assert!(s.contains("N: 1,000, iterations: 3"));
        assert!(s.contains("Total duration: 5ms"));
        assert!(!s.contains("C[N/2]"));
    }

    #[test]
    fn detailed_report_has_probe() {
        let p = CliPresenter::new(false, false, true);
        let s = p.render_report(&report("recursive", 1));
        assert!(s.contains("C[N/2] = -250"));
        assert!(s.contains("CPU:"));
    }

    #[test]
    fn quiet_convolution_is_bare_samples() {
        let p = CliPresenter::new(false, true, false);
        let s = p.render_convolution(
            "recursive",
            (3, 3),
            &[0.0, 1.0, 2.5, 4.0, 1.5],
            Duration::from_micros(3),
        );
        assert_eq!(s, "0 1 2.5 4 1.5");
    }

    #[test]
    fn normal_convolution() {
        let p = CliPresenter::new(false, false, true);
        let s = p.render_convolution("direct", (2, 2), &[1.0, 2.0, 1.0], Duration::from_millis(1));
        assert!(s.contains("Method: direct"));
        assert!(s.contains("Lengths: 2 * 2 -> 3"));
        assert!(s.contains("C = [1, 2, 1]"));
    }

    #[test]
    fn comparison_sorted_by_median() {
        let p = CliPresenter::new(false, false, false);
        let table = p
            .render_comparison(&[report("recursive", 5), report("iterative", 1)])
            .unwrap();
        let rec = table.find("recursive").unwrap();
        let iter = table.find("iterative").unwrap();
        assert!(iter < rec);
    }

    #[test]
    fn comparison_skipped() {
        let p = CliPresenter::new(false, false, false);
        assert!(p.render_comparison(&[report("recursive", 1)]).is_none());
        let quiet = CliPresenter::new(false, true, false);
        assert!(quiet
            .render_comparison(&[report("a", 1), report("b", 2)])
            .is_none());
    }

    #[test]
    fn present_functions_do_not_panic() {
        let p = CliPresenter::default();
        p.present_reports(&[report("recursive", 1), report("iterative", 1)]);
        p.present_convolution("recursive", (1, 1), &[2.0], Duration::ZERO);
    }
}
