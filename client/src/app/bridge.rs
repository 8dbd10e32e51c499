//! # Bridge Adapter
//!
//! The only component that calls the backend. It subscribes to every
//! `*-requested` topic that maps to a backend operation and hands the
//! request to the matching task in [`super::tasks`].
//!
//! The bridge does no business validation; payloads arrive already checked
//! by the handlers that published them.

use std::sync::Arc;

use super::bus::{EventBus, Subscriptions};
use super::events::{
    CalibrationMessage, CaptureMessage, ConfigMessage, DeckMessage, ExportMessage, MatchMessage,
    Message, SeasonMessage, StatsMessage, Topic, UiMessage,
};
use super::tasks::{self, InFlight, TaskContext};

/// Request topics served by the bridge
pub const ROUTES: [Topic; 20] = [
    Topic::DeckCreateRequested,
    Topic::DeckUpdateRequested,
    Topic::DeckDeleteRequested,
    Topic::DecksLoadRequested,
    Topic::ActiveDeckSaveRequested,
    Topic::MatchSaveRequested,
    Topic::MatchDeleteRequested,
    Topic::MatchUpdateFieldRequested,
    Topic::MatchesLoadRequested,
    Topic::StatsLoadRequested,
    Topic::ConfigLoadRequested,
    Topic::ConfigRegionSelectRequested,
    Topic::CaptureTestRequested,
    Topic::CalibrateStateRequested,
    Topic::CalibrationStatusRequested,
    Topic::SeasonsLoadRequested,
    Topic::ActiveSeasonLoadRequested,
    Topic::ActiveSeasonSaveRequested,
    Topic::ExportCsvRequested,
    Topic::OpenUrlRequested,
];

pub struct Bridge {
    ctx: TaskContext,
    subscriptions: Subscriptions,
}

impl Bridge {
    /// Subscribe to every route on `bus`. Dropping the bridge detaches it.
    pub fn attach(bus: &EventBus, ctx: TaskContext) -> Self {
        let mut subscriptions = Subscriptions::new();
        for topic in ROUTES {
            let ctx = ctx.clone();
            subscriptions.push(bus.subscribe(topic, move |message| dispatch(&ctx, message)));
        }
        tracing::debug!(routes = subscriptions.len(), "Bridge attached");

        Self { ctx, subscriptions }
    }

    pub fn in_flight(&self) -> Arc<InFlight> {
        self.ctx.in_flight()
    }

    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }
}

fn dispatch(ctx: &TaskContext, message: &Message) {
    match message {
        Message::Deck(m) => match m {
            DeckMessage::CreateRequested { name } => tasks::decks::create(ctx, name.clone()),
            DeckMessage::UpdateRequested { id, name } => {
                tasks::decks::update(ctx, *id, name.clone())
            }
            DeckMessage::DeleteRequested { id } => tasks::decks::delete(ctx, *id),
            DeckMessage::LoadRequested => tasks::decks::load(ctx),
            DeckMessage::ActiveSaveRequested { deck_id } => {
                tasks::decks::save_active(ctx, *deck_id)
            }
            _ => unrouted(message),
        },
        Message::Match(m) => match m {
            MatchMessage::SaveRequested(new_match) => {
                tasks::matches::save(ctx, new_match.clone())
            }
            MatchMessage::DeleteRequested { id } => tasks::matches::delete(ctx, *id),
            MatchMessage::UpdateFieldRequested { id, field, value } => {
                tasks::matches::update_field(ctx, *id, *field, value.clone())
            }
            MatchMessage::LoadRequested => tasks::matches::load(ctx),
            _ => unrouted(message),
        },
        Message::Stats(StatsMessage::LoadRequested { season }) => {
            tasks::stats::load(ctx, season.clone())
        }
        Message::Config(m) => match m {
            ConfigMessage::LoadRequested => tasks::config::load(ctx),
            ConfigMessage::RegionSelectRequested => tasks::config::select_region(ctx),
            _ => unrouted(message),
        },
        Message::Capture(CaptureMessage::TestRequested) => tasks::capture::test(ctx),
        Message::Calibration(m) => match m {
            CalibrationMessage::CalibrateRequested { state } => {
                tasks::calibration::calibrate(ctx, *state)
            }
            CalibrationMessage::StatusRequested => tasks::calibration::status(ctx),
            _ => unrouted(message),
        },
        Message::Season(m) => match m {
            SeasonMessage::LoadRequested => tasks::seasons::load(ctx),
            SeasonMessage::ActiveLoadRequested => tasks::seasons::load_active(ctx),
            SeasonMessage::ActiveSaveRequested { season } => {
                tasks::seasons::save_active(ctx, season.clone())
            }
            _ => unrouted(message),
        },
        Message::Export(ExportMessage::CsvRequested) => tasks::export::csv(ctx),
        Message::Ui(UiMessage::OpenUrlRequested { url }) => {
            tasks::export::open_url(ctx, url.clone())
        }
        _ => unrouted(message),
    }
}

fn unrouted(message: &Message) {
    tracing::warn!(topic = %message.topic(), "Bridge received a message it does not route");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_cover_backend_requests() {
        let ui_only = [Topic::StatsDetailRequested, Topic::MatchupRequested];
        for topic in ROUTES {
            assert!(topic.is_request(), "{} is not a request", topic);
            assert!(!ui_only.contains(&topic));
        }

        let mut unique = ROUTES.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ROUTES.len());
    }
}
