//! Version information.

/// Crate version.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line including the available engines.
#[must_use]
pub fn full_version() -> String {
    format!(
        "{} {} (engines: {})",
        fftconv_cli::completion::BIN_NAME,
        version(),
        fftconv_core::engine::ENGINE_NAMES.join(", ")
    )
}
