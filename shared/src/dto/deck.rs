use serde::{Deserialize, Serialize};

/// Longest deck name the backend accepts.
pub const DECK_NAME_MAX_LEN: usize = 100;

/// Deck record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Deck {
    /// Label used when a deck id is referenced but the deck is unknown locally.
    pub fn fallback_name(id: i64) -> String {
        format!("Deck #{}", id)
    }
}

/// Look up a deck name by id, falling back to [`Deck::fallback_name`].
pub fn deck_name(decks: &[Deck], id: i64) -> String {
    decks
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| Deck::fallback_name(id))
}
