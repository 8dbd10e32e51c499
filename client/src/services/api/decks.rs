//! # Deck Endpoints

use serde_json::json;
use shared::Deck;

use super::client::HttpBackend;
use crate::core::service::BackendResult;

pub async fn create_deck(client: &HttpBackend, name: String) -> BackendResult<Deck> {
    client.call("create_deck", json!({ "name": name })).await
}

/// Returns `false` when no deck has `id`.
pub async fn update_deck(client: &HttpBackend, id: i64, name: String) -> BackendResult<bool> {
    client
        .call("update_deck", json!({ "deck_id": id, "name": name }))
        .await
}

pub async fn delete_deck(client: &HttpBackend, id: i64) -> BackendResult<bool> {
    client.call("delete_deck", json!({ "deck_id": id })).await
}

pub async fn get_decks(client: &HttpBackend) -> BackendResult<Vec<Deck>> {
    client.call("get_decks", json!({})).await
}
