//! Match records as stored by the backend.
//!
//! The backend is lenient about what it hands back (nullable results, blank
//! opponents, tags stored as one comma-separated string), so deserialization
//! normalizes those shapes once here and the rest of the client sees clean values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opponent label used when the opponent is blank or unknown.
pub const UNKNOWN_OPPONENT: &str = "?";

/// Marker stored when it is not known who played first.
pub const UNKNOWN_FIRST_PLAYER: &str = "?";

/// Outcome of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
    #[default]
    Unknown,
}

impl MatchResult {
    /// Backend code for this result.
    pub fn code(self) -> &'static str {
        match self {
            MatchResult::Win => "W",
            MatchResult::Loss => "L",
            MatchResult::Draw => "D",
            MatchResult::Unknown => "?",
        }
    }

    /// Strict parse of a backend code. Returns `None` for anything else.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "W" => Some(MatchResult::Win),
            "L" => Some(MatchResult::Loss),
            "D" => Some(MatchResult::Draw),
            "?" => Some(MatchResult::Unknown),
            _ => None,
        }
    }

    /// Wins and losses count towards winrates, draws and unknowns do not.
    pub fn is_decided(self) -> bool {
        matches!(self, MatchResult::Win | MatchResult::Loss)
    }
}

impl From<Option<String>> for MatchResult {
    fn from(code: Option<String>) -> Self {
        code.as_deref()
            .and_then(MatchResult::parse)
            .unwrap_or(MatchResult::Unknown)
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Match record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub id: i64,
    #[serde(default)]
    pub result: MatchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<i64>,
    #[serde(default = "unknown_opponent", deserialize_with = "deserialize_opponent")]
    pub opponent: String,
    #[serde(default = "unknown_first_player", deserialize_with = "deserialize_first_player")]
    pub first_player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub captured_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl MatchRecord {
    /// Season label, treating a blank label as no season.
    pub fn season_label(&self) -> Option<&str> {
        self.season.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Returns a copy of this record with one whitelisted field replaced.
    ///
    /// `value` is interpreted the way the backend stores the field: blank
    /// opponents become [`UNKNOWN_OPPONENT`], blank seasons and notes are
    /// cleared, tags are split on commas.
    pub fn with_field(&self, field: MatchField, value: &str) -> Result<MatchRecord, FieldError> {
        let mut updated = self.clone();
        match field {
            MatchField::Result => {
                updated.result = MatchResult::parse(value)
                    .ok_or_else(|| FieldError::InvalidResult(value.to_string()))?;
            }
            MatchField::Opponent => updated.opponent = normalize_opponent(value),
            MatchField::FirstPlayer => updated.first_player = normalize_first_player(value),
            MatchField::Season => updated.season = non_blank(value),
            MatchField::Notes => updated.notes = non_blank(value),
            MatchField::Tags => updated.tags = split_tags(value),
        }
        Ok(updated)
    }
}

/// Payload for creating a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewMatch {
    pub result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<i64>,
    pub opponent: String,
    pub first_player: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Fields that may be changed after a match has been recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Result,
    Opponent,
    FirstPlayer,
    Season,
    Notes,
    Tags,
}

impl MatchField {
    pub const ALL: [MatchField; 6] = [
        MatchField::Result,
        MatchField::Opponent,
        MatchField::FirstPlayer,
        MatchField::Season,
        MatchField::Notes,
        MatchField::Tags,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchField::Result => "result",
            MatchField::Opponent => "opponent",
            MatchField::FirstPlayer => "first_player",
            MatchField::Season => "season",
            MatchField::Notes => "notes",
            MatchField::Tags => "tags",
        }
    }
}

impl FromStr for MatchField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected field update
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field '{0}' cannot be updated")]
    UnknownField(String),

    #[error("Invalid result code '{0}' (expected W, L, D or ?)")]
    InvalidResult(String),
}

/// Trim an opponent name, mapping blank names to [`UNKNOWN_OPPONENT`].
pub fn normalize_first_player(marker: &str) -> String {
    let trimmed = marker.trim();
    if trimmed.is_empty() {
        UNKNOWN_FIRST_PLAYER.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_opponent(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        UNKNOWN_OPPONENT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split a comma-separated tag string, dropping empty entries.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn unknown_opponent() -> String {
    UNKNOWN_OPPONENT.to_string()
}

fn unknown_first_player() -> String {
    UNKNOWN_FIRST_PLAYER.to_string()
}

fn deserialize_opponent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_opponent(raw.as_deref().unwrap_or_default()))
}

fn deserialize_first_player<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_first_player(raw.as_deref().unwrap_or_default()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<String>),
    Text(String),
}

fn deserialize_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<TagsRepr>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagsRepr::List(tags)) => tags,
        Some(TagsRepr::Text(raw)) => split_tags(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MatchRecord {
        serde_json::from_str(r#"{"id": 1, "result": "L", "captured_at": "2025-01-01T10:00:00"}"#)
            .unwrap()
    }

    #[test]
    fn test_lenient_backend_shapes() {
        let json = r#"{
            "id": 3,
            "result": null,
            "deck_id": 2,
            "opponent": "   ",
            "first_player": null,
            "season": "S2",
            "captured_at": "2025-01-02T09:00:00",
            "notes": null,
            "tags": "ladder, tilt ,"
        }"#;
        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.result, MatchResult::Unknown);
        assert_eq!(record.opponent, UNKNOWN_OPPONENT);
        assert_eq!(record.first_player, UNKNOWN_FIRST_PLAYER);
        assert_eq!(record.tags, vec!["ladder".to_string(), "tilt".to_string()]);
    }

    #[test]
    fn test_result_codes() {
        assert_eq!(MatchResult::parse("W"), Some(MatchResult::Win));
        assert_eq!(MatchResult::parse(" D "), Some(MatchResult::Draw));
        assert_eq!(MatchResult::parse("win"), None);
        assert_eq!(serde_json::to_string(&MatchResult::Loss).unwrap(), "\"L\"");
        assert!(!MatchResult::Draw.is_decided());
    }

    #[test]
    fn test_with_field_replaces_one_field() {
        let original = record();
        let updated = original.with_field(MatchField::Result, "W").unwrap();
        assert_eq!(updated.result, MatchResult::Win);
        assert_eq!(original.result, MatchResult::Loss);
        assert_eq!(updated.captured_at, original.captured_at);

        let cleared = updated.with_field(MatchField::Season, "  ").unwrap();
        assert_eq!(cleared.season, None);
    }

    #[test]
    fn test_with_field_rejects_bad_result() {
        let err = record().with_field(MatchField::Result, "X").unwrap_err();
        assert_eq!(err, FieldError::InvalidResult("X".to_string()));
    }

    #[test]
    fn test_field_whitelist() {
        assert_eq!("first_player".parse::<MatchField>(), Ok(MatchField::FirstPlayer));
        assert!("raw_ocr_data".parse::<MatchField>().is_err());
    }
}
