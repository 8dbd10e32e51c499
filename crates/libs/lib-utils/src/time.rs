//! # Time Utilities
//!
//! Parsing of match capture timestamps using chrono.
//!
//! The backend writes local ISO-8601 timestamps without an offset
//! (`2025-03-01T20:15:00.123456`), older records may carry an offset or a
//! space separator. All of them are compared as naive date-times.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a capture timestamp.
pub fn parse_captured_at(moment: &str) -> Result<NaiveDateTime, Error> {
    let moment = moment.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(moment) {
        return Ok(dt.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(moment, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(moment, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::FailToDateParse(moment.to_string()))
}

/// Current local time in the backend's timestamp format.
pub fn now_local_iso() -> String {
    Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string()
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
