//! # Match Tracker Client - Library Root
//!
//! Client core of a card-game match tracker: it talks to the tracker
//! backend, keeps the last data it received and derives every statistic the
//! dashboard shows.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              tracker-client (this crate)               │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - Event bus, bridge, cache, detail panel   │
//! │  analytics  - Pure aggregations over cached matches    │
//! │  services   - HTTP implementation of the backend       │
//! │  debug      - Logging and event tracking               │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON
//!          ▼
//! ┌─────────────────────────────┐
//! │  Tracker backend            │
//! │  (matches, decks, capture)  │
//! └─────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::App`] orchestrator
//!   - `bus`: synchronous publish/subscribe, the only way components talk
//!   - `bridge` + `tasks`: the only callers of the backend
//!   - `state`: the analytics cache
//!   - `panel`: drill-down detail panel state machine
//! - **analytics**: global, per-deck, per-opponent, trend, season and streak
//!   aggregations
//! - **services**: `HttpBackend`
//! - **core**: error types and the `BackendService` trait
//! - **config**: environment-based client configuration
//! - **debug**: logging setup and the bus event tracker
//! - **utils**: input validation
//!
//! ## Core Concepts
//!
//! ### Request / result messages
//!
//! Components publish `<resource>-<action>-requested`; the bridge calls the
//! backend and the result comes back as `<resource>-<action-past-tense>` or
//! `<resource>-error`. See [`app::events`].
//!
//! ### Errors
//!
//! Validation errors are returned to the caller and never published. Backend
//! rejections are published verbatim; transport failures are published as
//! a generic message and logged with their cause.

pub mod analytics;
pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use crate::core::error::{AppError, Result};
