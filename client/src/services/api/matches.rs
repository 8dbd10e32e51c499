//! # Match Endpoints
//!
//! Matches, stats snapshots and the season list. `season: None` means all
//! seasons and is sent as `null`.

use serde_json::json;
use shared::{MatchField, MatchRecord, NewMatch, StatsSnapshot};

use super::client::HttpBackend;
use crate::core::service::BackendResult;

pub async fn get_stats(
    client: &HttpBackend,
    season: Option<String>,
) -> BackendResult<StatsSnapshot> {
    client.call("get_stats", json!({ "season": season })).await
}

pub async fn get_matches(
    client: &HttpBackend,
    season: Option<String>,
) -> BackendResult<Vec<MatchRecord>> {
    let matches: Vec<MatchRecord> = client
        .call("get_matches", json!({ "season": season }))
        .await?;
    tracing::debug!(count = matches.len(), "Matches received");
    Ok(matches)
}

pub async fn save_match(client: &HttpBackend, new_match: NewMatch) -> BackendResult<MatchRecord> {
    client
        .call("save_match", json!({ "match_data": new_match }))
        .await
}

pub async fn delete_match(client: &HttpBackend, id: i64) -> BackendResult<bool> {
    client.call("delete_match", json!({ "match_id": id })).await
}

pub async fn update_match_field(
    client: &HttpBackend,
    id: i64,
    field: MatchField,
    value: String,
) -> BackendResult<bool> {
    client
        .call(
            "update_match_field",
            json!({ "match_id": id, "field": field.as_str(), "value": value }),
        )
        .await
}

pub async fn get_seasons(client: &HttpBackend) -> BackendResult<Vec<String>> {
    client.call("get_seasons", json!({})).await
}
