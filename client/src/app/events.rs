//! # Bus Messages
//!
//! Closed set of messages carried by the [`EventBus`](super::bus::EventBus),
//! grouped by resource. Each variant has a fieldless [`Topic`] that listeners
//! subscribe to; [`Topic::as_str`] gives the stable wire name.
//!
//! ## Naming
//!
//! `<resource>-<action>-requested` asks the bridge for a backend call. It
//! settles as `<resource>-<action-past-tense>` on success or
//! `<resource>-error` on failure:
//!
//! ```text
//! deck-create-requested ──▶ create_deck ──▶ deck-created | deck-error
//! matches-load-requested ─▶ get_matches ⨝ get_decks ──▶ matches-loaded | matches-error
//! ```

use shared::{
    AppConfig, CalibrationState, CalibrationStatus, CaptureFrame, CaptureStatus, Deck, MatchField,
    MatchRecord, NewMatch, StatsSnapshot,
};

use super::panel::{DetailKind, PanelContent};
use crate::analytics::Dashboard;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Deck(DeckMessage),
    Match(MatchMessage),
    Stats(StatsMessage),
    Config(ConfigMessage),
    Capture(CaptureMessage),
    Calibration(CalibrationMessage),
    Season(SeasonMessage),
    Export(ExportMessage),
    Ui(UiMessage),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeckMessage {
    CreateRequested { name: String },
    Created(Deck),
    UpdateRequested { id: i64, name: String },
    Updated { id: i64, name: String },
    DeleteRequested { id: i64 },
    Deleted { id: i64 },
    LoadRequested,
    Loaded(Vec<Deck>),
    ActiveSaveRequested { deck_id: Option<i64> },
    ActiveSaved { deck_id: Option<i64> },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchMessage {
    SaveRequested(NewMatch),
    Created(MatchRecord),
    DeleteRequested { id: i64 },
    Deleted { id: i64 },
    UpdateFieldRequested { id: i64, field: MatchField, value: String },
    Updated { id: i64, field: MatchField },
    Error { message: String },
    LoadRequested,
    /// `season` is the filter the load was issued under
    Loaded {
        season: Option<String>,
        matches: Vec<MatchRecord>,
        decks: Vec<Deck>,
    },
    LoadError { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatsMessage {
    /// `None` uses the active season filter
    LoadRequested { season: Option<String> },
    Loaded(StatsSnapshot),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigMessage {
    LoadRequested,
    Loaded(AppConfig),
    RegionSelectRequested,
    RegionSelected(AppConfig),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureMessage {
    TestRequested,
    TestResult {
        frame: CaptureFrame,
        status: CaptureStatus,
    },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalibrationMessage {
    CalibrateRequested { state: CalibrationState },
    Calibrated { state: CalibrationState },
    StatusRequested,
    StatusLoaded(CalibrationStatus),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeasonMessage {
    LoadRequested,
    Loaded(Vec<String>),
    Error { message: String },
    ActiveLoadRequested,
    ActiveLoaded { season: Option<String> },
    ActiveSaveRequested { season: Option<String> },
    ActiveSaved { season: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportMessage {
    CsvRequested,
    CsvCompleted { path: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    StatsDetailRequested { kind: DetailKind },
    MatchupRequested { opponent: String },
    UpdateAvailable { version: String, url: String },
    OpenUrlRequested { url: String },
    UrlOpened { url: String },
    UrlError { message: String },
    DashboardUpdated(Box<Dashboard>),
    /// `None` when the panel is closed
    DetailPanelUpdated(Option<Box<PanelContent>>),
}

/// Subscription key of a [`Message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    DeckCreateRequested,
    DeckCreated,
    DeckUpdateRequested,
    DeckUpdated,
    DeckDeleteRequested,
    DeckDeleted,
    DecksLoadRequested,
    DecksLoaded,
    ActiveDeckSaveRequested,
    ActiveDeckSaved,
    DeckError,

    MatchSaveRequested,
    MatchCreated,
    MatchDeleteRequested,
    MatchDeleted,
    MatchUpdateFieldRequested,
    MatchUpdated,
    MatchError,
    MatchesLoadRequested,
    MatchesLoaded,
    MatchesError,

    StatsLoadRequested,
    StatsLoaded,
    StatsError,

    ConfigLoadRequested,
    ConfigLoaded,
    ConfigRegionSelectRequested,
    ConfigRegionSelected,
    ConfigError,

    CaptureTestRequested,
    CaptureTestResult,
    CaptureError,

    CalibrateStateRequested,
    StateCalibrated,
    CalibrationStatusRequested,
    CalibrationStatusLoaded,
    CalibrationError,

    SeasonsLoadRequested,
    SeasonsLoaded,
    SeasonError,
    ActiveSeasonLoadRequested,
    ActiveSeasonLoaded,
    ActiveSeasonSaveRequested,
    ActiveSeasonSaved,

    ExportCsvRequested,
    ExportCsvCompleted,
    ExportError,

    StatsDetailRequested,
    MatchupRequested,
    UpdateAvailable,
    OpenUrlRequested,
    UrlOpened,
    UrlError,
    DashboardUpdated,
    DetailPanelUpdated,
}

impl Topic {
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::DeckCreateRequested => "deck-create-requested",
            Topic::DeckCreated => "deck-created",
            Topic::DeckUpdateRequested => "deck-update-requested",
            Topic::DeckUpdated => "deck-updated",
            Topic::DeckDeleteRequested => "deck-delete-requested",
            Topic::DeckDeleted => "deck-deleted",
            Topic::DecksLoadRequested => "decks-load-requested",
            Topic::DecksLoaded => "decks-loaded",
            Topic::ActiveDeckSaveRequested => "active-deck-save-requested",
            Topic::ActiveDeckSaved => "active-deck-saved",
            Topic::DeckError => "deck-error",

            Topic::MatchSaveRequested => "match-save-requested",
            Topic::MatchCreated => "match-created",
            Topic::MatchDeleteRequested => "match-delete-requested",
            Topic::MatchDeleted => "match-deleted",
            Topic::MatchUpdateFieldRequested => "match-update-field-requested",
            Topic::MatchUpdated => "match-updated",
            Topic::MatchError => "match-error",
            Topic::MatchesLoadRequested => "matches-load-requested",
            Topic::MatchesLoaded => "matches-loaded",
            Topic::MatchesError => "matches-error",

            Topic::StatsLoadRequested => "stats-load-requested",
            Topic::StatsLoaded => "stats-loaded",
            Topic::StatsError => "stats-error",

            Topic::ConfigLoadRequested => "config-load-requested",
            Topic::ConfigLoaded => "config-loaded",
            Topic::ConfigRegionSelectRequested => "config-region-select-requested",
            Topic::ConfigRegionSelected => "config-region-selected",
            Topic::ConfigError => "config-error",

            Topic::CaptureTestRequested => "capture-test-requested",
            Topic::CaptureTestResult => "capture-test-result",
            Topic::CaptureError => "capture-error",

            Topic::CalibrateStateRequested => "calibrate-state-requested",
            Topic::StateCalibrated => "state-calibrated",
            Topic::CalibrationStatusRequested => "calibration-status-requested",
            Topic::CalibrationStatusLoaded => "calibration-status-loaded",
            Topic::CalibrationError => "calibration-error",

            Topic::SeasonsLoadRequested => "seasons-load-requested",
            Topic::SeasonsLoaded => "seasons-loaded",
            Topic::SeasonError => "season-error",
            Topic::ActiveSeasonLoadRequested => "active-season-load-requested",
            Topic::ActiveSeasonLoaded => "active-season-loaded",
            Topic::ActiveSeasonSaveRequested => "active-season-save-requested",
            Topic::ActiveSeasonSaved => "active-season-saved",

            Topic::ExportCsvRequested => "export-csv-requested",
            Topic::ExportCsvCompleted => "export-csv-completed",
            Topic::ExportError => "export-error",

            Topic::StatsDetailRequested => "stats-detail-requested",
            Topic::MatchupRequested => "matchup-requested",
            Topic::UpdateAvailable => "update-available",
            Topic::OpenUrlRequested => "open-url-requested",
            Topic::UrlOpened => "url-opened",
            Topic::UrlError => "url-error",
            Topic::DashboardUpdated => "dashboard-updated",
            Topic::DetailPanelUpdated => "detail-panel-updated",
        }
    }

    pub fn is_request(self) -> bool {
        self.as_str().ends_with("-requested")
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Message {
    pub fn topic(&self) -> Topic {
        match self {
            Message::Deck(m) => match m {
                DeckMessage::CreateRequested { .. } => Topic::DeckCreateRequested,
                DeckMessage::Created(_) => Topic::DeckCreated,
                DeckMessage::UpdateRequested { .. } => Topic::DeckUpdateRequested,
                DeckMessage::Updated { .. } => Topic::DeckUpdated,
                DeckMessage::DeleteRequested { .. } => Topic::DeckDeleteRequested,
                DeckMessage::Deleted { .. } => Topic::DeckDeleted,
                DeckMessage::LoadRequested => Topic::DecksLoadRequested,
                DeckMessage::Loaded(_) => Topic::DecksLoaded,
                DeckMessage::ActiveSaveRequested { .. } => Topic::ActiveDeckSaveRequested,
                DeckMessage::ActiveSaved { .. } => Topic::ActiveDeckSaved,
                DeckMessage::Error { .. } => Topic::DeckError,
            },
            Message::Match(m) => match m {
                MatchMessage::SaveRequested(_) => Topic::MatchSaveRequested,
                MatchMessage::Created(_) => Topic::MatchCreated,
                MatchMessage::DeleteRequested { .. } => Topic::MatchDeleteRequested,
                MatchMessage::Deleted { .. } => Topic::MatchDeleted,
                MatchMessage::UpdateFieldRequested { .. } => Topic::MatchUpdateFieldRequested,
                MatchMessage::Updated { .. } => Topic::MatchUpdated,
                MatchMessage::Error { .. } => Topic::MatchError,
                MatchMessage::LoadRequested => Topic::MatchesLoadRequested,
                MatchMessage::Loaded { .. } => Topic::MatchesLoaded,
                MatchMessage::LoadError { .. } => Topic::MatchesError,
            },
            Message::Stats(m) => match m {
                StatsMessage::LoadRequested { .. } => Topic::StatsLoadRequested,
                StatsMessage::Loaded(_) => Topic::StatsLoaded,
                StatsMessage::Error { .. } => Topic::StatsError,
            },
            Message::Config(m) => match m {
                ConfigMessage::LoadRequested => Topic::ConfigLoadRequested,
                ConfigMessage::Loaded(_) => Topic::ConfigLoaded,
                ConfigMessage::RegionSelectRequested => Topic::ConfigRegionSelectRequested,
                ConfigMessage::RegionSelected(_) => Topic::ConfigRegionSelected,
                ConfigMessage::Error { .. } => Topic::ConfigError,
            },
            Message::Capture(m) => match m {
                CaptureMessage::TestRequested => Topic::CaptureTestRequested,
                CaptureMessage::TestResult { .. } => Topic::CaptureTestResult,
                CaptureMessage::Error { .. } => Topic::CaptureError,
            },
            Message::Calibration(m) => match m {
                CalibrationMessage::CalibrateRequested { .. } => Topic::CalibrateStateRequested,
                CalibrationMessage::Calibrated { .. } => Topic::StateCalibrated,
                CalibrationMessage::StatusRequested => Topic::CalibrationStatusRequested,
                CalibrationMessage::StatusLoaded(_) => Topic::CalibrationStatusLoaded,
                CalibrationMessage::Error { .. } => Topic::CalibrationError,
            },
            Message::Season(m) => match m {
                SeasonMessage::LoadRequested => Topic::SeasonsLoadRequested,
                SeasonMessage::Loaded(_) => Topic::SeasonsLoaded,
                SeasonMessage::Error { .. } => Topic::SeasonError,
                SeasonMessage::ActiveLoadRequested => Topic::ActiveSeasonLoadRequested,
                SeasonMessage::ActiveLoaded { .. } => Topic::ActiveSeasonLoaded,
                SeasonMessage::ActiveSaveRequested { .. } => Topic::ActiveSeasonSaveRequested,
                SeasonMessage::ActiveSaved { .. } => Topic::ActiveSeasonSaved,
            },
            Message::Export(m) => match m {
                ExportMessage::CsvRequested => Topic::ExportCsvRequested,
                ExportMessage::CsvCompleted { .. } => Topic::ExportCsvCompleted,
                ExportMessage::Error { .. } => Topic::ExportError,
            },
            Message::Ui(m) => match m {
                UiMessage::StatsDetailRequested { .. } => Topic::StatsDetailRequested,
                UiMessage::MatchupRequested { .. } => Topic::MatchupRequested,
                UiMessage::UpdateAvailable { .. } => Topic::UpdateAvailable,
                UiMessage::OpenUrlRequested { .. } => Topic::OpenUrlRequested,
                UiMessage::UrlOpened { .. } => Topic::UrlOpened,
                UiMessage::UrlError { .. } => Topic::UrlError,
                UiMessage::DashboardUpdated(_) => Topic::DashboardUpdated,
                UiMessage::DetailPanelUpdated(_) => Topic::DetailPanelUpdated,
            },
        }
    }

    /// Text of a scoped error message, if this is one.
    pub fn error_text(&self) -> Option<&str> {
        match self {
            Message::Deck(DeckMessage::Error { message })
            | Message::Match(MatchMessage::Error { message })
            | Message::Match(MatchMessage::LoadError { message })
            | Message::Stats(StatsMessage::Error { message })
            | Message::Config(ConfigMessage::Error { message })
            | Message::Capture(CaptureMessage::Error { message })
            | Message::Calibration(CalibrationMessage::Error { message })
            | Message::Season(SeasonMessage::Error { message })
            | Message::Export(ExportMessage::Error { message })
            | Message::Ui(UiMessage::UrlError { message }) => Some(message.as_str()),
            _ => None,
        }
    }
}

macro_rules! impl_from_domain {
    ($($domain:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$domain> for Message {
                fn from(message: $domain) -> Self {
                    Message::$variant(message)
                }
            }
        )+
    };
}

impl_from_domain! {
    DeckMessage => Deck,
    MatchMessage => Match,
    StatsMessage => Stats,
    ConfigMessage => Config,
    CaptureMessage => Capture,
    CalibrationMessage => Calibration,
    SeasonMessage => Season,
    ExportMessage => Export,
    UiMessage => Ui,
}
