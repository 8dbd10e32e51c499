//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use shared::{
    AppConfig, CalibrationState, CalibrationStatus, CaptureFrame, CaptureStatus, Deck,
    ErrorResponse, ExportResult, MatchField, MatchRecord, NewMatch, RegionSelection,
    StatsSnapshot,
};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{BackendError, BackendResult, BackendService};

/// HTTP client for communicating with the tracker backend.
///
/// Wrap it in an `Arc` and hand it to [`crate::app::App::new`]; the inner
/// `reqwest::Client` pools connections across tasks.
pub struct HttpBackend {
    pub(crate) client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client with the configured per-request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke backend operation `op` with named `args` and decode the reply.
    #[tracing::instrument(skip(self, args))]
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        op: &str,
        args: Value,
    ) -> BackendResult<T> {
        let start = Instant::now();
        let url = format!("{}/api/{}", self.base_url, op);

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Backend network error");
                BackendError::Transport(format!("Network error: {}", e))
            })?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(|e| {
            tracing::error!(error = %e, status = status.as_u16(), "Backend response parse error");
            BackendError::Transport(format!("Failed to parse response: {}", e))
        })?;

        tracing::debug!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Backend replied"
        );

        // A structured error wins over the status code
        if !status.is_success() && structured_error(&body).is_none() {
            return Err(BackendError::Transport(format!("HTTP status {}", status)));
        }
        decode_reply(body)
    }
}

fn structured_error(body: &Value) -> Option<ErrorResponse> {
    ErrorResponse::deserialize(body).ok()
}

/// Decode a backend reply.
///
/// An object with an `error` string is a domain rejection. Anything that
/// does not deserialize into `T` is a transport failure.
pub fn decode_reply<T: DeserializeOwned>(body: Value) -> BackendResult<T> {
    if let Some(ErrorResponse { error }) = structured_error(&body) {
        return Err(BackendError::Rejected(error));
    }
    serde_json::from_value(body)
        .map_err(|e| BackendError::Transport(format!("Malformed reply: {}", e)))
}

#[async_trait]
impl BackendService for HttpBackend {
    async fn create_deck(&self, name: String) -> BackendResult<Deck> {
        super::decks::create_deck(self, name).await
    }

    async fn update_deck(&self, id: i64, name: String) -> BackendResult<bool> {
        super::decks::update_deck(self, id, name).await
    }

    async fn delete_deck(&self, id: i64) -> BackendResult<bool> {
        super::decks::delete_deck(self, id).await
    }

    async fn get_decks(&self) -> BackendResult<Vec<Deck>> {
        super::decks::get_decks(self).await
    }

    async fn get_config(&self) -> BackendResult<AppConfig> {
        super::config::get_config(self).await
    }

    async fn save_config(&self, config: AppConfig) -> BackendResult<bool> {
        super::config::save_config(self, config).await
    }

    async fn get_stats(&self, season: Option<String>) -> BackendResult<StatsSnapshot> {
        super::matches::get_stats(self, season).await
    }

    async fn get_matches(&self, season: Option<String>) -> BackendResult<Vec<MatchRecord>> {
        super::matches::get_matches(self, season).await
    }

    async fn save_match(&self, new_match: NewMatch) -> BackendResult<MatchRecord> {
        super::matches::save_match(self, new_match).await
    }

    async fn delete_match(&self, id: i64) -> BackendResult<bool> {
        super::matches::delete_match(self, id).await
    }

    async fn update_match_field(
        &self,
        id: i64,
        field: MatchField,
        value: String,
    ) -> BackendResult<bool> {
        super::matches::update_match_field(self, id, field, value).await
    }

    async fn get_seasons(&self) -> BackendResult<Vec<String>> {
        super::matches::get_seasons(self).await
    }

    async fn start_region_selection(&self) -> BackendResult<RegionSelection> {
        super::config::start_region_selection(self).await
    }

    async fn capture_test_frame(&self) -> BackendResult<CaptureFrame> {
        super::capture::capture_test_frame(self).await
    }

    async fn get_capture_status(&self) -> BackendResult<CaptureStatus> {
        super::capture::get_capture_status(self).await
    }

    async fn calibrate_state(&self, state: CalibrationState) -> BackendResult<()> {
        super::capture::calibrate_state(self, state).await
    }

    async fn get_calibration_status(&self) -> BackendResult<CalibrationStatus> {
        super::capture::get_calibration_status(self).await
    }

    async fn export_matches_csv(&self) -> BackendResult<ExportResult> {
        super::capture::export_matches_csv(self).await
    }

    async fn open_external_url(&self, url: String) -> BackendResult<()> {
        super::capture::open_external_url(self, url).await
    }
}
