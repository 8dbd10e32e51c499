//! # Navigation Handlers
//!
//! Handlers for the stats detail panel and external links.

use crate::app::bus::EventBus;
use crate::app::events::UiMessage;
use crate::app::panel::DetailKind;

/// Open the detail panel from a stats card.
pub(crate) fn open_detail(bus: &EventBus, kind: DetailKind) {
    bus.publish(UiMessage::StatsDetailRequested { kind }.into());
}

/// Jump straight to one opponent's matchup.
pub(crate) fn request_matchup(bus: &EventBus, opponent: &str) {
    bus.publish(
        UiMessage::MatchupRequested {
            opponent: opponent.to_string(),
        }
        .into(),
    );
}

/// Open `url` in the user's browser through the backend.
pub(crate) fn open_url(bus: &EventBus, url: &str) {
    bus.publish(
        UiMessage::OpenUrlRequested {
            url: url.to_string(),
        }
        .into(),
    );
}
