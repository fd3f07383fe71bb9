//! Host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "site";
pub const DEFAULT_MANIFEST: &str = "poems-list.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/`.
    pub site_dir: PathBuf,
    /// Manifest path relative to `site_dir`.
    pub manifest: PathBuf,
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `site`
    /// - `MANIFEST`: default `poems-list.json`, relative to `SITE_DIR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_dir = PathBuf::from(lookup("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned()));
        let manifest = PathBuf::from(lookup("MANIFEST").unwrap_or_else(|| DEFAULT_MANIFEST.to_owned()));
        Ok(Self { host, port, site_dir, manifest })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.site_dir.join(&self.manifest)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
