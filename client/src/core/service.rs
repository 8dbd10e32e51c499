//! # Service Traits
//!
//! The backend boundary. [`BackendService`] lists every operation the client
//! may invoke; only the bridge tasks in [`crate::app::tasks`] call it.

use async_trait::async_trait;
use shared::{
    AppConfig, CalibrationState, CalibrationStatus, CaptureFrame, CaptureStatus, Deck,
    ExportResult, MatchField, MatchRecord, NewMatch, RegionSelection, StatsSnapshot,
};
use thiserror::Error;

/// Text shown to the user for any failure that is not a domain rejection.
pub const GENERIC_ERROR_MESSAGE: &str = "Unexpected error";

/// Failure of a backend operation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a structured error.
    #[error("{0}")]
    Rejected(String),

    /// The call itself failed. The cause is for logs only.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl BackendError {
    /// Text a renderer may show for this error.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Rejected(msg) => msg.clone(),
            BackendError::Transport(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Operations offered by the backend service.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait BackendService: Send + Sync {
    async fn create_deck(&self, name: String) -> BackendResult<Deck>;

    /// Returns `false` when no deck has that id.
    async fn update_deck(&self, id: i64, name: String) -> BackendResult<bool>;

    async fn delete_deck(&self, id: i64) -> BackendResult<bool>;

    async fn get_decks(&self) -> BackendResult<Vec<Deck>>;

    async fn get_config(&self) -> BackendResult<AppConfig>;

    /// Returns `false` when the configuration could not be written.
    async fn save_config(&self, config: AppConfig) -> BackendResult<bool>;

    async fn get_stats(&self, season: Option<String>) -> BackendResult<StatsSnapshot>;

    async fn get_matches(&self, season: Option<String>) -> BackendResult<Vec<MatchRecord>>;

    async fn save_match(&self, record: NewMatch) -> BackendResult<MatchRecord>;

    async fn delete_match(&self, id: i64) -> BackendResult<bool>;

    async fn update_match_field(
        &self,
        id: i64,
        field: MatchField,
        value: String,
    ) -> BackendResult<bool>;

    async fn get_seasons(&self) -> BackendResult<Vec<String>>;

    /// Blocks until the user picks a region or cancels.
    async fn start_region_selection(&self) -> BackendResult<RegionSelection>;

    async fn capture_test_frame(&self) -> BackendResult<CaptureFrame>;

    async fn get_capture_status(&self) -> BackendResult<CaptureStatus>;

    async fn calibrate_state(&self, state: CalibrationState) -> BackendResult<()>;

    async fn get_calibration_status(&self) -> BackendResult<CalibrationStatus>;

    async fn export_matches_csv(&self) -> BackendResult<ExportResult>;

    async fn open_external_url(&self, url: String) -> BackendResult<()>;
}
