//! # Event Handler
//!
//! Completion listeners owned by the [`App`](super::App): they write bridge
//! results into the [`AnalyticsCache`], chain the follow-up loads each
//! result implies and push fresh views to renderers.
//!
//! ```text
//! match-created ──▶ stats / matches / seasons loads
//! matches-loaded ─▶ cache ──▶ dashboard-updated (+ detail-panel-updated)
//! ```
//!
//! All listeners run on the App's turn, so cache writes never race each
//! other.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::bus::{EventBus, Subscriptions, WeakEventBus};
use super::events::{
    CalibrationMessage, DeckMessage, ExportMessage, MatchMessage, Message, SeasonMessage,
    StatsMessage, Topic, UiMessage,
};
use super::panel::{DetailPanel, PanelContent, PanelInput, PanelState};
use super::state::AnalyticsCache;

/// Topics the App listens to
const LISTENS_TO: [Topic; 28] = [
    Topic::DeckCreated,
    Topic::DeckUpdated,
    Topic::DeckDeleted,
    Topic::DecksLoaded,
    Topic::MatchCreated,
    Topic::MatchUpdated,
    Topic::MatchDeleted,
    Topic::MatchesLoaded,
    Topic::StatsLoaded,
    Topic::StateCalibrated,
    Topic::SeasonsLoaded,
    Topic::ActiveSeasonLoaded,
    Topic::ActiveSeasonSaved,
    Topic::StatsDetailRequested,
    Topic::MatchupRequested,
    Topic::UpdateAvailable,
    Topic::UrlOpened,
    Topic::ExportCsvCompleted,
    Topic::DeckError,
    Topic::MatchError,
    Topic::MatchesError,
    Topic::StatsError,
    Topic::ConfigError,
    Topic::CaptureError,
    Topic::CalibrationError,
    Topic::SeasonError,
    Topic::ExportError,
    Topic::UrlError,
];

/// Latest update announced by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateNotice {
    pub version: String,
    pub url: String,
}

pub struct Wiring {
    bus: WeakEventBus,
    cache: AnalyticsCache,
    panel: Mutex<DetailPanel>,
    update_notice: Mutex<Option<UpdateNotice>>,
}

impl Wiring {
    pub fn new(bus: WeakEventBus, cache: AnalyticsCache) -> Self {
        Self {
            bus,
            cache,
            panel: Mutex::new(DetailPanel::new()),
            update_notice: Mutex::new(None),
        }
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel.lock().state().clone()
    }

    /// Panel content rebuilt from the current cache.
    pub fn panel_content(&self) -> Option<PanelContent> {
        let panel = self.panel.lock().clone();
        panel.render(&self.cache.read())
    }

    pub fn update_notice(&self) -> Option<UpdateNotice> {
        self.update_notice.lock().clone()
    }

    fn publish(&self, message: impl Into<Message>) {
        self.bus.publish(message.into());
    }

    /// Refetch everything derived from matches.
    fn reload_stats_and_matches(&self) {
        self.publish(StatsMessage::LoadRequested { season: None });
        self.publish(MatchMessage::LoadRequested);
    }

    pub fn handle(&self, message: &Message) {
        match message {
            Message::Match(MatchMessage::Created(record)) => {
                debug!(id = record.id, "Match created");
                self.reload_stats_and_matches();
                self.publish(SeasonMessage::LoadRequested);
            }
            Message::Match(MatchMessage::Updated { .. })
            | Message::Match(MatchMessage::Deleted { .. }) => self.reload_stats_and_matches(),
            Message::Match(MatchMessage::Loaded {
                season,
                matches,
                decks,
            }) => {
                let current = self
                    .cache
                    .replace_matches(season.clone(), matches.clone(), decks.clone());
                if !current {
                    warn!(
                        loaded_for = season.as_deref().unwrap_or("all"),
                        active = self.cache.season_filter().as_deref().unwrap_or("all"),
                        "Applied matches loaded under a previous season filter"
                    );
                }
                self.refresh_views();
            }

            Message::Deck(DeckMessage::Created(_))
            | Message::Deck(DeckMessage::Updated { .. })
            | Message::Deck(DeckMessage::Deleted { .. }) => {
                self.publish(MatchMessage::LoadRequested);
                self.publish(DeckMessage::LoadRequested);
                self.publish(StatsMessage::LoadRequested { season: None });
            }
            Message::Deck(DeckMessage::Loaded(decks)) => {
                debug!(count = decks.len(), "Deck list refreshed");
            }

            Message::Stats(StatsMessage::Loaded(snapshot)) => {
                self.cache.replace_stats(snapshot.clone());
                self.refresh_views();
            }

            Message::Calibration(CalibrationMessage::Calibrated { state }) => {
                info!(state = %state, "State calibrated");
                self.publish(CalibrationMessage::StatusRequested);
            }

            Message::Season(SeasonMessage::Loaded(seasons)) => {
                self.cache.replace_seasons(seasons.clone());
            }
            Message::Season(SeasonMessage::ActiveLoaded { season }) => {
                self.cache.set_season_filter(season.clone());
                self.publish(SeasonMessage::LoadRequested);
                self.reload_stats_and_matches();
            }
            Message::Season(SeasonMessage::ActiveSaved { season }) => {
                debug!(season = season.as_deref().unwrap_or("all"), "Active season saved");
            }

            Message::Export(ExportMessage::CsvCompleted { path }) => {
                info!(path = %path, "CSV export written");
            }

            Message::Ui(UiMessage::StatsDetailRequested { kind }) => {
                self.drive_panel(PanelInput::Open(*kind));
            }
            Message::Ui(UiMessage::MatchupRequested { opponent }) => {
                self.drive_panel(PanelInput::Matchup(opponent.clone()));
            }
            Message::Ui(UiMessage::UpdateAvailable { version, url }) => {
                info!(version = %version, "Update available");
                *self.update_notice.lock() = Some(UpdateNotice {
                    version: version.clone(),
                    url: url.clone(),
                });
            }
            Message::Ui(UiMessage::UrlOpened { url }) => debug!(url = %url, "External URL opened"),

            other => match other.error_text() {
                Some(text) => warn!(topic = %other.topic(), error = %text, "Request failed"),
                None => debug!(topic = %other.topic(), "No wiring for message"),
            },
        }
    }

    /// Apply `input` to the panel and publish its new content.
    pub fn drive_panel(&self, input: PanelInput) {
        let changed = self.panel.lock().apply(input);
        if changed {
            self.publish_panel();
        }
    }

    fn publish_panel(&self) {
        let content = self.panel_content().map(Box::new);
        self.publish(UiMessage::DetailPanelUpdated(content));
    }

    /// Recompute the dashboard, and the panel when it is open.
    fn refresh_views(&self) {
        self.publish(UiMessage::DashboardUpdated(Box::new(self.cache.dashboard())));
        if self.panel.lock().is_open() {
            self.publish_panel();
        }
    }
}

/// Subscribe `wiring` to every topic it handles.
pub fn register(bus: &EventBus, wiring: Arc<Wiring>) -> Subscriptions {
    let mut subscriptions = Subscriptions::new();
    for topic in LISTENS_TO {
        let wiring = Arc::clone(&wiring);
        subscriptions.push(bus.subscribe(topic, move |message| wiring.handle(message)));
    }
    subscriptions
}
