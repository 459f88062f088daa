//! Report persistence.

use std::path::Path;

use crate::errors::BenchError;
use crate::report::BenchReport;

/// Save reports as a pretty-printed JSON array.
pub fn save_reports(reports: &[BenchReport], path: &Path) -> Result<(), BenchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(reports)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), count = reports.len(), "report written");
    Ok(())
}
