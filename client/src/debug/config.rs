//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

const DEFAULT_LOG_LEVEL: &str = "tracker_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "tracker_client=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Also write human-readable logs to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stderr: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_dir: PathBuf::from(get_env_or("TRACKER_LOG_DIR", "logs")),
            log_to_stderr: get_env_or("TRACKER_LOG_STDERR", "1") != "0",
        }
    }

    /// Path prefix of the rotating log file; the appender adds the date.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(super::logger::LOG_FILE_PREFIX)
    }
}
