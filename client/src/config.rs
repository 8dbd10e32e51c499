//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast if misconfigured.
//!
//! | Variable | Default |
//! |---|---|
//! | `TRACKER_BACKEND_URL` | `http://127.0.0.1:5174` |
//! | `TRACKER_REQUEST_TIMEOUT_SECS` | `10` |
//!
//! Logging has its own settings, see [`crate::debug::config::LogConfig`].

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5174";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the backend service, without trailing slash
    pub backend_url: String,

    /// Per-request timeout of the HTTP client in seconds
    ///
    /// This is a property of the transport only. The bridge itself never
    /// abandons an in-flight call.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let backend_url = get_env_or("TRACKER_BACKEND_URL", DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs =
            get_env_parse_or("TRACKER_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            backend_url,
            request_timeout_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "TRACKER_BACKEND_URL must start with http:// or https:// (got '{}')",
                self.backend_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "TRACKER_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
