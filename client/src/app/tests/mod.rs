//! Orchestration tests: the App wired to an in-memory backend.

mod capture;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    AppConfig, CalibrationState, CalibrationStatus, CaptureFrame, CaptureRegion, CaptureStatus,
    Deck, DeckStats, ExportResult, MatchField, MatchRecord, NewMatch, RegionSelection,
    StatsSnapshot,
};

use super::bus::{EventBus, Subscriptions};
use super::events::{Message, Topic};
use super::{App, MatchForm};
use crate::analytics::{self, Tally};
use crate::core::service::{BackendError, BackendResult, BackendService};

#[derive(Default)]
struct MockState {
    decks: Vec<Deck>,
    matches: Vec<MatchRecord>,
    config: AppConfig,
    calibration: CalibrationStatus,
    next_id: i64,
}

/// In-memory backend with failure injection and a call log
#[derive(Default)]
pub(crate) struct MockBackend {
    state: Mutex<MockState>,
    failures: Mutex<HashMap<&'static str, BackendError>>,
    match_delays: Mutex<HashMap<Option<String>, Duration>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, decks: Vec<Deck>, matches: Vec<MatchRecord>) {
        let mut state = self.state.lock();
        state.next_id = matches.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        state.decks = decks;
        state.matches = matches;
    }

    pub fn set_config(&self, config: AppConfig) {
        self.state.lock().config = config;
    }

    pub fn config(&self) -> AppConfig {
        self.state.lock().config.clone()
    }

    /// Make every later call of `op` fail with `error`.
    pub fn fail(&self, op: &'static str, error: BackendError) {
        self.failures.lock().insert(op, error);
    }

    /// Delay `get_matches` replies for one season filter.
    pub fn delay_matches(&self, season: Option<&str>, delay: Duration) {
        self.match_delays
            .lock()
            .insert(season.map(str::to_string), delay);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|c| **c == op).count()
    }

    fn enter(&self, op: &'static str) -> BackendResult<()> {
        self.calls.lock().push(op);
        match self.failures.lock().get(op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn in_season(&self, season: &Option<String>) -> Vec<MatchRecord> {
        self.state
            .lock()
            .matches
            .iter()
            .filter(|m| season.is_none() || m.season_label() == season.as_deref())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl BackendService for MockBackend {
    async fn create_deck(&self, name: String) -> BackendResult<Deck> {
        self.enter("create_deck")?;
        let mut state = self.state.lock();
        if state.decks.iter().any(|d| d.name == name) {
            return Err(BackendError::Rejected(
                "A deck with this name already exists".to_string(),
            ));
        }
        let id = state.decks.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let deck = Deck {
            id,
            name,
            created: None,
        };
        state.decks.push(deck.clone());
        Ok(deck)
    }

    async fn update_deck(&self, id: i64, name: String) -> BackendResult<bool> {
        self.enter("update_deck")?;
        let mut state = self.state.lock();
        Ok(match state.decks.iter_mut().find(|d| d.id == id) {
            Some(deck) => {
                deck.name = name;
                true
            }
            None => false,
        })
    }

    async fn delete_deck(&self, id: i64) -> BackendResult<bool> {
        self.enter("delete_deck")?;
        let mut state = self.state.lock();
        let before = state.decks.len();
        state.decks.retain(|d| d.id != id);
        Ok(state.decks.len() != before)
    }

    async fn get_decks(&self) -> BackendResult<Vec<Deck>> {
        self.enter("get_decks")?;
        Ok(self.state.lock().decks.clone())
    }

    async fn get_config(&self) -> BackendResult<AppConfig> {
        self.enter("get_config")?;
        Ok(self.state.lock().config.clone())
    }

    async fn save_config(&self, config: AppConfig) -> BackendResult<bool> {
        self.enter("save_config")?;
        self.state.lock().config = config;
        Ok(true)
    }

    async fn get_stats(&self, season: Option<String>) -> BackendResult<StatsSnapshot> {
        self.enter("get_stats")?;
        let matches = self.in_season(&season);
        let decks = self.state.lock().decks.clone();
        let tally = Tally::of(&matches);
        let deck_stats = decks
            .iter()
            .map(|deck| {
                let t = Tally::of(matches.iter().filter(|m| m.deck_id == Some(deck.id)));
                DeckStats {
                    deck_id: deck.id,
                    deck_name: deck.name.clone(),
                    wins: t.wins,
                    losses: t.losses,
                    total: t.total,
                    winrate: t.winrate().unwrap_or(0.0),
                }
            })
            .collect();

        Ok(StatsSnapshot {
            total_matches: tally.total,
            wins: tally.wins,
            losses: tally.losses,
            winrate: analytics::winrate(tally.wins, tally.losses).unwrap_or(0.0),
            deck_stats,
            ..StatsSnapshot::default()
        })
    }

    async fn get_matches(&self, season: Option<String>) -> BackendResult<Vec<MatchRecord>> {
        self.enter("get_matches")?;
        let delay = self.match_delays.lock().get(&season).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.in_season(&season))
    }

    async fn save_match(&self, new_match: NewMatch) -> BackendResult<MatchRecord> {
        self.enter("save_match")?;
        let mut state = self.state.lock();
        if let Some(deck_id) = new_match.deck_id {
            if !state.decks.iter().any(|d| d.id == deck_id) {
                return Err(BackendError::Rejected("deck not found".to_string()));
            }
        }
        state.next_id += 1;
        let record = MatchRecord {
            id: state.next_id,
            result: new_match.result,
            deck_id: new_match.deck_id,
            opponent: new_match.opponent,
            first_player: new_match.first_player,
            season: new_match.season,
            captured_at: new_match.captured_at.unwrap_or_default(),
            notes: new_match.notes,
            tags: new_match.tags,
        };
        state.matches.push(record.clone());
        Ok(record)
    }

    async fn delete_match(&self, id: i64) -> BackendResult<bool> {
        self.enter("delete_match")?;
        let mut state = self.state.lock();
        let before = state.matches.len();
        state.matches.retain(|m| m.id != id);
        Ok(state.matches.len() != before)
    }

    async fn update_match_field(
        &self,
        id: i64,
        field: MatchField,
        value: String,
    ) -> BackendResult<bool> {
        self.enter("update_match_field")?;
        let mut state = self.state.lock();
        let Some(record) = state.matches.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };
        *record = record
            .with_field(field, &value)
            .map_err(|e| BackendError::Rejected(e.to_string()))?;
        Ok(true)
    }

    async fn get_seasons(&self) -> BackendResult<Vec<String>> {
        self.enter("get_seasons")?;
        let mut seasons: Vec<String> = self
            .state
            .lock()
            .matches
            .iter()
            .filter_map(|m| m.season_label().map(str::to_string))
            .collect();
        seasons.sort();
        seasons.dedup();
        Ok(seasons)
    }

    async fn start_region_selection(&self) -> BackendResult<RegionSelection> {
        self.enter("start_region_selection")?;
        let region = CaptureRegion {
            x: 10,
            y: 20,
            width: 1280,
            height: 720,
        };
        self.state.lock().config.mumu_region = Some(region);
        Ok(RegionSelection { region })
    }

    async fn capture_test_frame(&self) -> BackendResult<CaptureFrame> {
        self.enter("capture_test_frame")?;
        Ok(CaptureFrame {
            image_b64: "iVBORw0KGgo=".to_string(),
            width: 1280,
            height: 720,
        })
    }

    async fn get_capture_status(&self) -> BackendResult<CaptureStatus> {
        self.enter("get_capture_status")?;
        Ok(CaptureStatus {
            mumu_detected: true,
            state: "pre_queue".to_string(),
            region_configured: self.state.lock().config.mumu_region.is_some(),
        })
    }

    async fn calibrate_state(&self, state: CalibrationState) -> BackendResult<()> {
        self.enter("calibrate_state")?;
        let mut mock = self.state.lock();
        match state {
            CalibrationState::PreQueue => mock.calibration.pre_queue = true,
            CalibrationState::InCombat => mock.calibration.in_combat = true,
            CalibrationState::EndScreen => mock.calibration.end_screen = true,
        }
        Ok(())
    }

    async fn get_calibration_status(&self) -> BackendResult<CalibrationStatus> {
        self.enter("get_calibration_status")?;
        Ok(self.state.lock().calibration)
    }

    async fn export_matches_csv(&self) -> BackendResult<ExportResult> {
        self.enter("export_matches_csv")?;
        Ok(ExportResult {
            path: "exports/matches.csv".to_string(),
        })
    }

    async fn open_external_url(&self, _url: String) -> BackendResult<()> {
        self.enter("open_external_url")?;
        Ok(())
    }
}

/// Messages published on the watched topics, in order
pub(crate) struct Recorder {
    log: Arc<Mutex<Vec<Message>>>,
    _subscriptions: Subscriptions,
}

impl Recorder {
    pub fn watch(bus: &EventBus, topics: &[Topic]) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subscriptions = Subscriptions::new();
        for topic in topics {
            let log = Arc::clone(&log);
            subscriptions.push(bus.subscribe(*topic, move |message| {
                log.lock().push(message.clone());
            }));
        }
        Self {
            log,
            _subscriptions: subscriptions,
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.log.lock().clone()
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.log.lock().iter().map(Message::topic).collect()
    }

    pub fn count(&self, topic: Topic) -> usize {
        self.log.lock().iter().filter(|m| m.topic() == topic).count()
    }
}

pub(crate) fn deck(id: i64, name: &str) -> Deck {
    Deck {
        id,
        name: name.to_string(),
        created: None,
    }
}

/// App on `backend`, started and settled.
pub(crate) async fn started_app(backend: &Arc<MockBackend>) -> App {
    let app = App::new(backend.clone()).unwrap();
    app.start();
    app.settle().await;
    app
}
