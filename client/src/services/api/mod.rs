//! # Backend API Client Module
//!
//! HTTP client for the tracker backend. Each backend operation is a
//! `POST {base_url}/api/<operation>` with a JSON object of named arguments.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - HttpBackend, reply decoding, BackendService impl
//! ├── decks.rs    - Deck endpoints
//! ├── matches.rs  - Match, stats and season endpoints
//! ├── config.rs   - Configuration and region selection endpoints
//! └── capture.rs  - Capture, calibration, export and URL endpoints
//! ```

pub mod capture;
pub mod client;
pub mod config;
pub mod decks;
pub mod matches;

pub use client::{decode_reply, HttpBackend};
