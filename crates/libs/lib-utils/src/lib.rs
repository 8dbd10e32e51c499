//! # Utilities Library
//!
//! Shared utility functions for environment variables, capture timestamps, and validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{now_local_iso, parse_captured_at};
pub use validation::{validate_max_length, validate_not_empty};
