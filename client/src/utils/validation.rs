/// Validation utilities for user input

use lib_utils::validation::{validate_max_length, validate_not_empty};
use shared::{
    normalize_first_player, normalize_opponent, split_tags, MatchField, MatchResult,
    DECK_NAME_MAX_LEN,
};

use crate::core::error::{AppError, Result};

pub const OPPONENT_MAX_LEN: usize = 100;
pub const SEASON_MAX_LEN: usize = 50;
pub const NOTES_MAX_LEN: usize = 500;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, for use with `?`.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

impl From<std::result::Result<(), String>> for ValidationResult {
    fn from(result: std::result::Result<(), String>) -> Self {
        match result {
            Ok(()) => ValidationResult::ok(),
            Err(message) => ValidationResult::err(message),
        }
    }
}

/// Validate a deck name
pub fn validate_deck_name(name: &str) -> ValidationResult {
    let name = name.trim();
    if let Err(message) = validate_not_empty(name, "Deck name") {
        return ValidationResult::err(message);
    }
    validate_max_length(name, DECK_NAME_MAX_LEN, "Deck name").into()
}

/// Validate an opponent name. Blank is allowed (unknown opponent).
pub fn validate_opponent(opponent: &str) -> ValidationResult {
    validate_max_length(opponent.trim(), OPPONENT_MAX_LEN, "Opponent name").into()
}

/// Validate a season label. Blank is allowed (no season).
pub fn validate_season(season: &str) -> ValidationResult {
    validate_max_length(season.trim(), SEASON_MAX_LEN, "Season").into()
}

/// Validate match notes
pub fn validate_notes(notes: &str) -> ValidationResult {
    validate_max_length(notes.trim(), NOTES_MAX_LEN, "Notes").into()
}

/// Validate and normalize the new value of a match field.
///
/// Returns the value in the form the backend stores.
pub fn normalize_field_value(field: MatchField, value: &str) -> Result<String> {
    match field {
        MatchField::Result => MatchResult::parse(value)
            .map(|r| r.code().to_string())
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid result '{}' (expected W, L, D or ?)",
                    value.trim()
                ))
            }),
        MatchField::Opponent => {
            validate_opponent(value).into_result()?;
            Ok(normalize_opponent(value))
        }
        MatchField::Season => {
            validate_season(value).into_result()?;
            Ok(value.trim().to_string())
        }
        MatchField::Notes => {
            validate_notes(value).into_result()?;
            Ok(value.trim().to_string())
        }
        MatchField::FirstPlayer => Ok(normalize_first_player(value)),
        MatchField::Tags => Ok(split_tags(value).join(",")),
    }
}
