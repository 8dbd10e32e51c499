//! # Action Handlers
//!
//! User actions, organized by domain. Each handler validates its input
//! locally and only then publishes a request; invalid input returns
//! [`AppError::Validation`](crate::core::AppError::Validation) and nothing
//! reaches the bus.

pub mod decks;
pub mod matches;
pub mod navigation;
pub mod seasons;
