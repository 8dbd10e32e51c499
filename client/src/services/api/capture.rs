//! # Capture Endpoints
//!
//! Capture tests, detector calibration, CSV export and opening links in the
//! user's browser.

use serde_json::{json, Value};
use shared::{CalibrationState, CalibrationStatus, CaptureFrame, CaptureStatus, ExportResult};

use super::client::HttpBackend;
use crate::core::service::BackendResult;

pub async fn capture_test_frame(client: &HttpBackend) -> BackendResult<CaptureFrame> {
    client.call("capture_test_frame", json!({})).await
}

pub async fn get_capture_status(client: &HttpBackend) -> BackendResult<CaptureStatus> {
    client.call("get_capture_status", json!({})).await
}

pub async fn calibrate_state(client: &HttpBackend, state: CalibrationState) -> BackendResult<()> {
    let _: Value = client
        .call("calibrate_state", json!({ "state_name": state.as_str() }))
        .await?;
    Ok(())
}

pub async fn get_calibration_status(client: &HttpBackend) -> BackendResult<CalibrationStatus> {
    client.call("get_calibration_status", json!({})).await
}

pub async fn export_matches_csv(client: &HttpBackend) -> BackendResult<ExportResult> {
    client.call("export_matches_csv", json!({})).await
}

pub async fn open_external_url(client: &HttpBackend, url: String) -> BackendResult<()> {
    let _: Value = client
        .call("open_external_url", json!({ "url": url }))
        .await?;
    Ok(())
}
