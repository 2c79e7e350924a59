//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REPORT_DIR: &str = ".";
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `report.json` and the files it attaches.
    pub report_dir: PathBuf,
    pub port: u16,
    /// Build output of the viewer; its `pkg/` holds the WASM bundle.
    pub site_root: PathBuf,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `REPORT_DIR`: default `.`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: default `target/site`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let report_dir = non_empty(lookup("REPORT_DIR")).unwrap_or_else(|| DEFAULT_REPORT_DIR.to_owned());
        let site_root = non_empty(lookup("SITE_ROOT")).unwrap_or_else(|| DEFAULT_SITE_ROOT.to_owned());

        Ok(Self { report_dir: PathBuf::from(report_dir), port, site_root: PathBuf::from(site_root) })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
