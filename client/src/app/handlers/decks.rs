//! # Deck Handlers
//!
//! Handlers for creating, renaming, deleting and activating decks.

use crate::app::bus::EventBus;
use crate::app::events::DeckMessage;
use crate::core::error::Result;
use crate::utils::validation::validate_deck_name;

/// Handle deck creation
///
/// Internal handler function - use [`crate::app::App::create_deck`] instead.
pub(crate) fn create_deck(bus: &EventBus, name: &str) -> Result<()> {
    validate_deck_name(name).into_result()?;
    bus.publish(
        DeckMessage::CreateRequested {
            name: name.trim().to_string(),
        }
        .into(),
    );
    Ok(())
}

/// Handle deck rename
///
/// Internal handler function - use [`crate::app::App::rename_deck`] instead.
pub(crate) fn rename_deck(bus: &EventBus, id: i64, name: &str) -> Result<()> {
    validate_deck_name(name).into_result()?;
    bus.publish(
        DeckMessage::UpdateRequested {
            id,
            name: name.trim().to_string(),
        }
        .into(),
    );
    Ok(())
}

pub(crate) fn delete_deck(bus: &EventBus, id: i64) {
    bus.publish(DeckMessage::DeleteRequested { id }.into());
}

/// Remember `deck_id` as the deck new matches are recorded with.
pub(crate) fn set_active_deck(bus: &EventBus, deck_id: Option<i64>) {
    bus.publish(DeckMessage::ActiveSaveRequested { deck_id }.into());
}
