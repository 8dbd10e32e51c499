//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the backend service.
//!
//! ## Module Organization
//!
//! - [`deck`] - Deck records
//! - [`matches`] - Match records, new-match payloads, field updates
//! - [`stats`] - Aggregated statistics computed by the backend
//! - [`config`] - Client configuration persisted by the backend
//! - [`capture`] - Screen capture, calibration and CSV export results
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Errors**: Every operation may instead answer with an [`ErrorResponse`]
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/create_deck
//! Content-Type: application/json
//!
//! { "name": "Lugia VSTAR" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "error": "Un deck avec ce nom existe déjà" }
//! ```

use serde::{Deserialize, Serialize};

pub mod capture;
pub mod config;
pub mod deck;
pub mod matches;
pub mod stats;

pub use capture::*;
pub use config::*;
pub use deck::*;
pub use matches::*;
pub use stats::*;

/// Structured error returned by the backend in place of a result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
