//! # Match Handlers
//!
//! Handlers for recording, editing and deleting matches.

use lib_utils::now_local_iso;
use shared::{
    normalize_first_player, normalize_opponent, split_tags, MatchField, MatchResult, NewMatch,
};

use crate::app::bus::EventBus;
use crate::app::events::MatchMessage;
use crate::core::error::Result;
use crate::utils::validation::{
    normalize_field_value, validate_notes, validate_opponent, validate_season,
};

/// Raw input of the manual match entry form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchForm {
    pub result: MatchResult,
    pub deck_id: Option<i64>,
    pub opponent: String,
    pub first_player: String,
    pub season: String,
    /// Empty means now
    pub captured_at: String,
    pub notes: String,
    /// Comma separated
    pub tags: String,
}

impl MatchForm {
    /// Validate and normalize into the payload the backend stores.
    pub fn into_new_match(self) -> Result<NewMatch> {
        validate_opponent(&self.opponent).into_result()?;
        validate_season(&self.season).into_result()?;
        validate_notes(&self.notes).into_result()?;

        let captured_at = if self.captured_at.trim().is_empty() {
            now_local_iso()
        } else {
            lib_utils::parse_captured_at(&self.captured_at).map_err(|e| {
                crate::core::AppError::Validation(format!("Invalid capture time: {}", e))
            })?;
            self.captured_at.trim().to_string()
        };

        Ok(NewMatch {
            result: self.result,
            deck_id: self.deck_id,
            opponent: normalize_opponent(&self.opponent),
            first_player: normalize_first_player(&self.first_player),
            season: non_blank(&self.season),
            captured_at: Some(captured_at),
            notes: non_blank(&self.notes),
            tags: split_tags(&self.tags),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Handle match save
///
/// Internal handler function - use [`crate::app::App::save_match`] instead.
pub(crate) fn save_match(bus: &EventBus, form: MatchForm) -> Result<()> {
    let new_match = form.into_new_match()?;
    bus.publish(MatchMessage::SaveRequested(new_match).into());
    Ok(())
}

/// Handle inline edit of one match field
///
/// Internal handler function - use [`crate::app::App::update_match_field`] instead.
pub(crate) fn update_match_field(
    bus: &EventBus,
    id: i64,
    field: MatchField,
    value: &str,
) -> Result<()> {
    let value = normalize_field_value(field, value)?;
    bus.publish(MatchMessage::UpdateFieldRequested { id, field, value }.into());
    Ok(())
}

pub(crate) fn delete_match(bus: &EventBus, id: i64) {
    bus.publish(MatchMessage::DeleteRequested { id }.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppError;

    #[test]
    fn test_form_normalization() {
        let form = MatchForm {
            result: MatchResult::Win,
            deck_id: Some(3),
            opponent: "   ".to_string(),
            season: " ".to_string(),
            captured_at: "2025-03-01 20:15:00".to_string(),
            tags: "ladder, bo1".to_string(),
            ..MatchForm::default()
        };

        let new_match = form.into_new_match().unwrap();
        assert_eq!(new_match.opponent, "?");
        assert_eq!(new_match.first_player, "?");
        assert_eq!(new_match.season, None);
        assert_eq!(new_match.notes, None);
        assert_eq!(new_match.tags, vec!["ladder", "bo1"]);
        assert_eq!(new_match.captured_at.as_deref(), Some("2025-03-01 20:15:00"));
    }

    #[test]
    fn test_form_rejects_bad_input() {
        let long_notes = MatchForm {
            notes: "n".repeat(501),
            ..MatchForm::default()
        };
        assert!(matches!(long_notes.into_new_match(), Err(AppError::Validation(_))));

        let bad_time = MatchForm {
            captured_at: "yesterday".to_string(),
            ..MatchForm::default()
        };
        assert!(bad_time.into_new_match().is_err());
    }

    #[test]
    fn test_empty_capture_time_is_now() {
        let new_match = MatchForm::default().into_new_match().unwrap();
        let captured_at = new_match.captured_at.unwrap();
        assert!(lib_utils::parse_captured_at(&captured_at).is_ok());
    }
}
