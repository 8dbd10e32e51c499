//! # Logging and Diagnostics
//!
//! - **File-based logging**: Structured logs under `logs/` with daily rotation
//! - **Event tracking**: Bounded history of bus traffic and listener failures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracker_client::debug::{self, LogConfig};
//!
//! # fn main() -> tracker_client::Result<()> {
//! let _guard = debug::init_logger(&LogConfig::from_env())?;
//! tracing::info!(season = "S3", "Season filter applied");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `tracker_client=debug,info`)
//! - `TRACKER_LOG_DIR`: Log directory (default: `logs`)
//! - `TRACKER_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)

pub mod config;
pub mod event_tracker;
pub mod logger;

pub use config::LogConfig;
pub use event_tracker::{EventInfo, EventKind, EventTracker};
pub use logger::init as init_logger;
