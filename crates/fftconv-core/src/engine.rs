//! FFT engines and the name-based engine factory.

use std::collections::HashMap;
use std::sync::Arc;

use num_complex::Complex64;
use parking_lot::RwLock;

use crate::errors::{check_power_of_two, FftError};
use crate::fft_core::fft_in_place_unchecked;
use crate::fft_recursion::fft_unchecked;

/// Names of the built-in engines, in the order `"all"` runs them.
pub const ENGINE_NAMES: [&str; 2] = ["recursive", "iterative"];

/// A radix-2 transform implementation.
pub trait FftEngine: Send + Sync {
    /// Transform `data` forward or inverse, returning a new sequence.
    fn transform(&self, data: &[Complex64], inverse: bool) -> Result<Vec<Complex64>, FftError>;

    /// Get the name of this engine.
    fn name(&self) -> &'static str;
}

/// Recursive even/odd rebuild.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveFft;

impl RecursiveFft {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FftEngine for RecursiveFft {
    fn transform(&self, data: &[Complex64], inverse: bool) -> Result<Vec<Complex64>, FftError> {
        check_power_of_two(data.len())?;
        Ok(fft_unchecked(data, inverse))
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

/// In-place bit-reversal Cooley-Tukey.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeFft;

impl IterativeFft {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FftEngine for IterativeFft {
    fn transform(&self, data: &[Complex64], inverse: bool) -> Result<Vec<Complex64>, FftError> {
        check_power_of_two(data.len())?;
        let mut out = data.to_vec();
        fft_in_place_unchecked(&mut out, inverse);
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "iterative"
    }
}

/// Factory trait for looking up engines by name.
pub trait EngineFactory: Send + Sync {
    /// Get or create an engine by name.
    fn get(&self, name: &str) -> Result<Arc<dyn FftEngine>, FftError>;

    /// List all available engine names.
    fn available(&self) -> Vec<&'static str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultEngineFactory {
    cache: RwLock<HashMap<String, Arc<dyn FftEngine>>>,
}

impl DefaultEngineFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_engine(name: &str) -> Result<Arc<dyn FftEngine>, FftError> {
        match name {
            "recursive" | "rec" => Ok(Arc::new(RecursiveFft::new())),
            "iterative" | "iter" => Ok(Arc::new(IterativeFft::new())),
            _ => Err(FftError::UnknownEngine(name.to_string())),
        }
    }
}

impl Default for DefaultEngineFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineFactory for DefaultEngineFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn FftEngine>, FftError> {
        if let Some(engine) = self.cache.read().get(name) {
            return Ok(Arc::clone(engine));
        }

        let engine = Self::create_engine(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&engine));
        Ok(engine)
    }

    fn available(&self) -> Vec<&'static str> {
        ENGINE_NAMES.to_vec()
    }
}

/// Resolve an `--algo` selection: `"all"` or a single engine name.
pub fn select_engines(
    algo: &str,
    factory: &dyn EngineFactory,
) -> Result<Vec<Arc<dyn FftEngine>>, FftError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
