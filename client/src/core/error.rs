//! # Common Error Types
//!
//! Consolidated error handling for the tracker client.
//!
//! ## Error Categories
//! Errors are categorized by their source:
//!
//! - **Validation**: Input rejected locally, before any request is published
//! - **Backend**: The backend refused an operation and said why
//! - **Transport**: A backend call failed unexpectedly (network, malformed reply)
//! - **Config**: Invalid or unreadable client configuration
//! - **State**: Runtime wiring problems (no async runtime, logger already set)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use tracker_client::core::error::AppError;
//!
//! fn validate_opponent(name: &str) -> Result<&str, AppError> {
//!     if name.len() > 100 {
//!         return Err(AppError::Validation("Opponent name is too long".to_string()));
//!     }
//!     Ok(name)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - [`BackendError`] → `AppError::Backend` / `AppError::Transport`
//! - `lib_utils::envs::Error` → `AppError::Config`

use thiserror::Error;

use super::service::BackendError;

/// Application-wide error type for the tracker client.
///
/// # Example
///
/// ```rust
/// use tracker_client::core::error::AppError;
///
/// let err = AppError::Validation("Deck name cannot be empty".to_string());
/// assert_eq!(err.to_string(), "Validation error: Deck name cannot be empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation error.
    ///
    /// Raised by the action helpers in [`crate::app::handlers`]. A validation
    /// error never becomes a bus message.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Domain rejection reported by the backend, message shown verbatim.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Unexpected failure while talking to the backend.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Application state or runtime error.
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected(msg) => AppError::Backend(msg),
            BackendError::Transport(msg) => AppError::Transport(msg),
        }
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
