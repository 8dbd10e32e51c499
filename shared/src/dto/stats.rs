use serde::{Deserialize, Serialize};

/// Statistics snapshot computed by the backend for one season filter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatsSnapshot {
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    /// Percentage in 0–100. Only meaningful when `wins + losses > 0`.
    pub winrate: f64,
    #[serde(default)]
    pub deck_stats: Vec<DeckStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_streak: Option<Streak>,
    #[serde(default)]
    pub best_win_streak: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_deck: Option<TopDeck>,
}

impl StatsSnapshot {
    pub fn has_decided_matches(&self) -> bool {
        self.wins + self.losses > 0
    }
}

/// Per-deck line of a [`StatsSnapshot`]. Decks without matches are included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckStats {
    pub deck_id: i64,
    pub deck_name: String,
    pub wins: u32,
    pub losses: u32,
    pub total: u32,
    pub winrate: f64,
}

impl DeckStats {
    pub fn has_decided_matches(&self) -> bool {
        self.wins + self.losses > 0
    }
}

/// Run of identical decided results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Streak {
    #[serde(rename = "type")]
    pub kind: Option<StreakKind>,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StreakKind {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

/// Most played deck
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopDeck {
    pub name: String,
    pub total: u32,
}
