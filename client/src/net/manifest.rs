//! Poem manifest loading.
//!
//! Client-side (csr): one `GET` via `gloo-net`, no retry.
//! Native builds: the fetch reports [`ManifestError::Unavailable`] since there
//! is no page to resolve the manifest against. Parsing is shared with the
//! site host, which checks the manifest file on disk at startup.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures surface as typed errors so the directory can
//! switch to its failure placeholder. A body that parses but is not an array
//! is not an error: it reads as an empty collection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use super::types::PoemRecord;

/// Manifest location relative to the page that hosts the poem list.
pub const MANIFEST_URL: &str = "../poems-list.json";

/// Failure modes for loading the manifest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    /// The request never produced a response.
    #[error("manifest request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("manifest request returned status {status}")]
    Status { status: u16 },

    /// The body was not valid JSON.
    #[error("manifest parse failed: {0}")]
    Parse(String),

    /// The manifest file could not be read from disk.
    #[error("manifest read failed: {0}")]
    Io(String),

    /// No browser environment to fetch from.
    #[error("manifest fetch not available outside the browser")]
    Unavailable,
}

/// Parse a manifest body.
///
/// A JSON value that is not an array yields an empty collection. Array
/// entries that are not objects are skipped.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] if `body` is not JSON at all.
pub fn parse_manifest(body: &str) -> Result<Vec<PoemRecord>, ManifestError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ManifestError::Parse(e.to_string()))?;
    Ok(records_from_value(value))
}

fn records_from_value(value: serde_json::Value) -> Vec<PoemRecord> {
    let serde_json::Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Fetch and parse the manifest at `url`.
///
/// # Errors
///
/// Returns a [`ManifestError`] when the request fails, the status is not
/// 2xx, or the body is not JSON.
pub async fn fetch_manifest(url: &str) -> Result<Vec<PoemRecord>, ManifestError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ManifestError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ManifestError::Status { status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| ManifestError::Network(e.to_string()))?;
        parse_manifest(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ManifestError::Unavailable)
    }
}
