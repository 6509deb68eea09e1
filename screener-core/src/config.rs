//! Screener configuration: TOML file with per-field defaults.
//!
//! ```toml
//! base_url = "http://127.0.0.1:8000"
//! endpoint = "/stocks-screener"
//! timeout_secs = 10
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    /// Backend origin, without the endpoint path.
    pub base_url: String,
    pub endpoint: String,
    /// Request timeout. Absent means wait indefinitely.
    pub timeout_secs: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
            endpoint: "/stocks-screener".into(),
            timeout_secs: None,
            log_level: "info".into(),
        }
    }
}

impl ScreenerConfig {
    /// Load from a TOML file. A missing file yields defaults; a file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Full URL of the listing endpoint.
    pub fn stocks_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{base}{}", self.endpoint)
        } else {
            format!("{base}/{}", self.endpoint)
        }
    }
}
