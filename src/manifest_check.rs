//! Startup check of the manifest file the site serves.
//!
//! The browser does the real load; this only reads the same file through the
//! same parser so a broken manifest shows up in the host logs.

use std::path::Path;

use poetry_client::net::manifest::{ManifestError, parse_manifest};

/// Number of poem records in the manifest at `path`.
pub fn check_manifest(path: &Path) -> Result<usize, ManifestError> {
    let body = std::fs::read_to_string(path).map_err(|e| ManifestError::Io(e.to_string()))?;
    Ok(parse_manifest(&body)?.len())
}

/// Run [`check_manifest`] and log the outcome. Never fatal.
pub fn report_manifest(path: &Path) {
    match check_manifest(path) {
        Ok(0) => tracing::warn!(path = %path.display(), "manifest has no poems"),
        Ok(count) => tracing::info!(path = %path.display(), count, "manifest loaded"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "manifest check failed"),
    }
}

#[cfg(test)]
#[path = "manifest_check_test.rs"]
mod tests;
