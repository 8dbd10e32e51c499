//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the tracker client and the backend service.
//! All DTOs use JSON serialization via `serde` for backend communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for backend operations
//!   - **[`dto::deck`]**: Decks
//!   - **[`dto::matches`]**: Match records, results and the field-update whitelist
//!   - **[`dto::stats`]**: Backend-computed statistics snapshot
//!   - **[`dto::config`]**: Persisted client configuration
//!   - **[`dto::capture`]**: Capture, calibration and export results
//! - **[`utils`]**: Display helpers
//!   - **[`utils::format_winrate`]**: Render a winrate or the "no data" marker
//!   - **[`utils::short_date`]**: Date part of a capture timestamp
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust and in JSON
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Match results use the backend's single-character codes (`W`, `L`, `D`, `?`)
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::matches::{MatchRecord, MatchResult};
//!
//! let json = r#"{"id": 7, "result": "W", "opponent": "", "captured_at": "2025-03-01T20:15:00"}"#;
//! let record: MatchRecord = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(record.result, MatchResult::Win);
//! assert_eq!(record.opponent, "?");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
