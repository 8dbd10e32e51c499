//! # Application Orchestrator
//!
//! The [`App`] owns the event bus, the analytics cache, the bridge and the
//! completion wiring, and exposes user actions as methods.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       App turn                               │
//! │  ┌───────────────┐ publish ┌──────────────────────────────┐  │
//! │  │ handlers::*   │────────▶│ EventBus (sync, in-process)  │  │
//! │  │ (validation)  │         └──┬──────────────┬────────────┘  │
//! │  └───────────────┘            │ *-requested  │ results       │
//! │                     ┌─────────▼───┐   ┌──────▼────────────┐  │
//! │                     │ Bridge      │   │ Wiring            │  │
//! │                     │ (routes)    │   │ cache + refresh   │  │
//! │                     └─────────┬───┘   └──────▲────────────┘  │
//! │                               │              │ on_tick()     │
//! └───────────────────────────────┼──────────────┼───────────────┘
//!                                 │ spawn        │ async_channel
//! ┌───────────────────────────────▼──────────────┴───────────────┐
//! │                  Bridge tasks (Tokio)                        │
//! │   BackendService call(s) ──▶ one terminal Message            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are published on the App's turn ([`App::on_tick`] or
//! [`App::settle`]), never from a task thread, so cache writes are
//! serialized.
//!
//! ## Key Components
//!
//! - **[`bus`]**: Synchronous publish/subscribe
//! - **[`events`]**: Closed message schema and topics
//! - **[`bridge`]**: Request topic to backend task routing
//! - **[`tasks`]**: One async task per backend request
//! - **[`state`]**: The [`AnalyticsCache`]
//! - **[`panel`]**: Drill-down detail panel state machine
//! - **[`handlers`]**: Validated user actions
//!
//! ## Example
//!
//! ```rust,ignore
//! let app = App::new(Arc::new(backend))?;
//! app.start();
//! app.settle().await;
//! println!("{:?}", app.dashboard().global);
//! ```

pub mod bridge;
pub mod bus;
pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod panel;
pub mod state;
pub mod tasks;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use async_channel::Receiver;
use shared::{CalibrationState, MatchField};
use tokio::runtime::Handle;

pub use bus::{EventBus, Subscription, Subscriptions};
pub use event_handler::UpdateNotice;
pub use events::{Message, Topic};
pub use handlers::matches::MatchForm;
pub use panel::{DetailKind, PanelContent, PanelInput, PanelState};
pub use state::{AnalyticsCache, CacheState};

use crate::analytics::opponents::OpponentSort;
use crate::analytics::Dashboard;
use crate::core::error::{AppError, Result};
use crate::core::service::BackendService;
use bridge::Bridge;
use event_handler::Wiring;
use events::{
    CalibrationMessage, CaptureMessage, ConfigMessage, DeckMessage, ExportMessage, MatchMessage,
    SeasonMessage, StatsMessage,
};
use tasks::TaskContext;

pub struct App {
    bus: EventBus,
    cache: AnalyticsCache,
    wiring: Arc<Wiring>,
    bridge: Bridge,
    event_rx: Receiver<Message>,
    _subscriptions: Subscriptions,
}

impl App {
    /// Build the App on the current Tokio runtime.
    pub fn new(backend: Arc<dyn BackendService>) -> Result<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| AppError::State(format!("App requires a Tokio runtime: {}", e)))?;

        let (event_tx, event_rx) = async_channel::unbounded();
        let bus = EventBus::new();
        let cache = AnalyticsCache::new();

        let ctx = TaskContext::new(backend, cache.clone(), event_tx, runtime);
        let bridge = Bridge::attach(&bus, ctx);

        let wiring = Arc::new(Wiring::new(bus.downgrade(), cache.clone()));
        let subscriptions = event_handler::register(&bus, Arc::clone(&wiring));

        tracing::info!(
            listeners = subscriptions.len(),
            bridged = bridge.is_attached(),
            "App initialized"
        );

        Ok(Self {
            bus,
            cache,
            wiring,
            bridge,
            event_rx,
            _subscriptions: subscriptions,
        })
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn cache(&self) -> &AnalyticsCache {
        &self.cache
    }

    pub fn publish(&self, message: impl Into<Message>) -> usize {
        self.bus.publish(message.into())
    }

    /// Issue the initial loads. The persisted season arrives later and
    /// triggers its own reload.
    pub fn start(&self) {
        self.publish(ConfigMessage::LoadRequested);
        self.publish(DeckMessage::LoadRequested);
        self.publish(SeasonMessage::ActiveLoadRequested);
        self.publish(StatsMessage::LoadRequested { season: None });
        self.publish(MatchMessage::LoadRequested);
        self.publish(CalibrationMessage::StatusRequested);
    }

    /// Publish every task result received so far. Returns how many.
    pub fn on_tick(&self) -> usize {
        let mut published = 0;
        while let Ok(message) = self.event_rx.try_recv() {
            self.bus.publish(message);
            published += 1;
        }
        published
    }

    /// Publish results until no task is in flight, including tasks started
    /// by the results themselves.
    pub async fn settle(&self) {
        let in_flight = self.bridge.in_flight();
        loop {
            self.on_tick();
            if in_flight.count() == 0 && self.event_rx.is_empty() {
                break;
            }

            tokio::select! {
                received = self.event_rx.recv() => {
                    if let Ok(message) = received {
                        self.bus.publish(message);
                    }
                }
                _ = in_flight.settled() => {}
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.bridge.in_flight().count()
    }

    // region:    --- Views

    pub fn dashboard(&self) -> Dashboard {
        self.cache.dashboard()
    }

    pub fn panel_state(&self) -> PanelState {
        self.wiring.panel_state()
    }

    pub fn panel_content(&self) -> Option<PanelContent> {
        self.wiring.panel_content()
    }

    pub fn update_notice(&self) -> Option<UpdateNotice> {
        self.wiring.update_notice()
    }

    // endregion: --- Views

    // region:    --- Actions

    pub fn create_deck(&self, name: &str) -> Result<()> {
        handlers::decks::create_deck(&self.bus, name)
    }

    pub fn rename_deck(&self, id: i64, name: &str) -> Result<()> {
        handlers::decks::rename_deck(&self.bus, id, name)
    }

    pub fn delete_deck(&self, id: i64) {
        handlers::decks::delete_deck(&self.bus, id)
    }

    pub fn set_active_deck(&self, deck_id: Option<i64>) {
        handlers::decks::set_active_deck(&self.bus, deck_id)
    }

    pub fn save_match(&self, form: MatchForm) -> Result<()> {
        handlers::matches::save_match(&self.bus, form)
    }

    pub fn update_match_field(&self, id: i64, field: MatchField, value: &str) -> Result<()> {
        handlers::matches::update_match_field(&self.bus, id, field, value)
    }

    pub fn delete_match(&self, id: i64) {
        handlers::matches::delete_match(&self.bus, id)
    }

    /// `None` or blank selects all seasons.
    pub fn change_season_filter(&self, season: Option<&str>) {
        handlers::seasons::change_season_filter(&self.bus, &self.cache, season)
    }

    pub fn select_capture_region(&self) {
        self.publish(ConfigMessage::RegionSelectRequested);
    }

    pub fn test_capture(&self) {
        self.publish(CaptureMessage::TestRequested);
    }

    pub fn calibrate(&self, state: CalibrationState) {
        self.publish(CalibrationMessage::CalibrateRequested { state });
    }

    pub fn export_csv(&self) {
        self.publish(ExportMessage::CsvRequested);
    }

    /// Open the page of the announced update. No-op without a notice.
    pub fn open_update_page(&self) -> bool {
        match self.wiring.update_notice() {
            Some(notice) => {
                handlers::navigation::open_url(&self.bus, &notice.url);
                true
            }
            None => false,
        }
    }

    // endregion: --- Actions

    // region:    --- Detail panel

    pub fn open_detail(&self, kind: DetailKind) {
        handlers::navigation::open_detail(&self.bus, kind)
    }

    pub fn show_matchup(&self, opponent: &str) {
        handlers::navigation::request_matchup(&self.bus, opponent)
    }

    pub fn select_opponent(&self, name: &str) {
        self.wiring
            .drive_panel(PanelInput::SelectOpponent(name.to_string()))
    }

    pub fn select_deck(&self, id: i64) {
        self.wiring.drive_panel(PanelInput::SelectDeck(id))
    }

    pub fn show_opponents(&self) {
        self.wiring.drive_panel(PanelInput::ShowOpponents)
    }

    pub fn show_decks(&self) {
        self.wiring.drive_panel(PanelInput::ShowDecks)
    }

    pub fn sort_opponents(&self, sort: OpponentSort) {
        self.wiring.drive_panel(PanelInput::SortOpponents(sort))
    }

    pub fn panel_back(&self) {
        self.wiring.drive_panel(PanelInput::Back)
    }

    pub fn close_panel(&self) {
        self.wiring.drive_panel(PanelInput::Close)
    }

    /// Escape key
    pub fn cancel_panel(&self) {
        self.wiring.drive_panel(PanelInput::Cancel)
    }

    // endregion: --- Detail panel
}
