//! Memory estimation for FFT convolution.

use std::mem::size_of;

use num_complex::Complex64;

use crate::poly::padded_len;

/// Memory estimate for one convolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEstimate {
    /// Padded transform length.
    pub padded_len: usize,
    /// Bytes held by the padded inputs, spectra and product.
    pub buffer_bytes: usize,
    /// Bytes of even/odd copies alive across the recursion.
    pub temp_bytes: usize,
    /// Bytes of the real-valued result.
    pub result_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for convolving sequences of length `la` and `lb`.
    #[must_use]
    pub fn estimate(la: usize, lb: usize) -> Self {
        let Some((n, m)) = padded_len(la, lb) else {
            return Self {
                padded_len: 0,
                buffer_bytes: 0,
                temp_bytes: 0,
                result_bytes: 0,
                total_bytes: 0,
            };
        };
        let cplx = size_of::<Complex64>();

        // Two padded inputs, two spectra, product, inverse output
        let buffer_bytes = 6 * m * cplx;
        // Halves at every level along one recursion path sum to < 2m samples,
        // plus the per-level output buffers.
        let temp_bytes = 4 * m * cplx;
        let result_bytes = n * size_of::<f64>();

        Self {
            padded_len: m,
            buffer_bytes,
            temp_bytes,
            result_bytes,
            total_bytes: buffer_bytes + temp_bytes + result_bytes,
        }
    }

    /// Check if the convolution fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Estimate total bytes for convolving sequences of length `la` and `lb`.
#[must_use]
pub fn estimate_convolution_memory(la: usize, lb: usize) -> usize {
    MemoryEstimate::estimate(la, lb).total_bytes
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means no limit and yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot be parsed.
pub fn parse_memory_limit(s: &str) -> Result<Option<usize>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit: {e}"))?;
    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| format!("memory limit too large: {s}"))
}
