//! # Shared Utility Functions
//!
//! Display helpers used by the client and its renderers.
//!
//! ## Winrates
//!
//! A winrate only exists when at least one match was won or lost. Renderers
//! show [`NO_DATA`] otherwise, never `0%`.
//!
//! ```rust
//! use shared::utils::format_winrate;
//!
//! assert_eq!(format_winrate(Some(66.7)), "66.7%");
//! assert_eq!(format_winrate(None), "—");
//! ```

/// Marker rendered in place of a missing winrate.
pub const NO_DATA: &str = "—";

/// Format an optional winrate with one decimal.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_winrate;
///
/// assert_eq!(format_winrate(Some(50.0)), "50.0%");
/// assert_eq!(format_winrate(Some(100.0)), "100.0%");
/// ```
pub fn format_winrate(winrate: Option<f64>) -> String {
    match winrate {
        Some(value) => format!("{:.1}%", value),
        None => NO_DATA.to_string(),
    }
}

/// Date part (`YYYY-MM-DD`) of a capture timestamp.
///
/// Timestamps shorter than a date are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::short_date;
///
/// assert_eq!(short_date("2025-03-01T20:15:00"), "2025-03-01");
/// assert_eq!(short_date("n/a"), "n/a");
/// ```
pub fn short_date(captured_at: &str) -> &str {
    captured_at.get(..10).unwrap_or(captured_at)
}
