//! # Services Module
//!
//! External service integrations of the tracker client.
//!
//! ```text
//! services/
//! └── api/   - HTTP implementation of BackendService
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Bridge tasks (crate::app::tasks)        │
//! │        │ Arc<dyn BackendService>         │
//! │  ┌─────▼────────────┐                    │
//! │  │  HttpBackend     │                    │
//! │  └─────┬────────────┘                    │
//! └────────┼─────────────────────────────────┘
//!          │ POST /api/<operation> (JSON)
//!          ▼
//! ┌──────────────────────────────────────────┐
//! │  Tracker backend (database, capture,     │
//! │  detector, CSV export)                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`BackendResult`](crate::core::BackendResult):
//! - A reply object with an `error` string: `BackendError::Rejected`, shown verbatim
//! - Network failures, non-success statuses and unparseable bodies:
//!   `BackendError::Transport`, shown as a generic message

pub mod api;
