//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The backend boundary (`BackendService`, `BackendError`)
//!
//! ## Dependency Injection
//!
//! The [`crate::app::App`] takes its backend as a trait object:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tracker_client::core::service::BackendService;
//! use tracker_client::services::api::HttpBackend;
//!
//! # fn demo(config: &tracker_client::config::ClientConfig) -> tracker_client::Result<()> {
//! // In production: the HTTP client
//! let backend: Arc<dyn BackendService> = Arc::new(HttpBackend::new(config)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{BackendError, BackendResult, BackendService, GENERIC_ERROR_MESSAGE};
