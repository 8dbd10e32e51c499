//! # Utility Functions
//!
//! Shared utility functions used across the tracker client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation for deck names, match fields and notes
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers
//! - [`lib_utils::validation`]: Generic string checks used here

pub mod validation;
