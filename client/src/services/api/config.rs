//! # Configuration Endpoints

use serde_json::json;
use shared::{AppConfig, RegionSelection};

use super::client::HttpBackend;
use crate::core::service::BackendResult;

pub async fn get_config(client: &HttpBackend) -> BackendResult<AppConfig> {
    client.call("get_config", json!({})).await
}

/// Keys of `config` the client does not know about are sent back unchanged.
pub async fn save_config(client: &HttpBackend, config: AppConfig) -> BackendResult<bool> {
    client.call("save_config", json!({ "config": config })).await
}

/// Blocks until the user has drawn a region or cancelled the overlay.
pub async fn start_region_selection(client: &HttpBackend) -> BackendResult<RegionSelection> {
    client.call("start_region_selection", json!({})).await
}
