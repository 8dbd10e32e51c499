//! Per-deck statistics.
//!
//! Two sources exist. [`per_deck`] groups the cached matches locally and only
//! knows decks that were played. The backend's [`StatsSnapshot`] lists every
//! deck, played or not: [`list_rows`] shows all of them, [`chart_rows`] keeps
//! the ones with at least one match.

use std::collections::HashMap;

use serde::Serialize;
use shared::{deck_name, Deck, DeckStats, MatchRecord, StatsSnapshot};

use super::{winrate, Tally};

/// Label of the group collecting matches recorded without a deck.
pub const NO_DECK_LABEL: &str = "No deck";

/// Locally computed statistics for one deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckAggregate {
    /// `None` groups matches recorded without a deck
    pub deck_id: Option<i64>,
    pub deck_name: String,
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub winrate: Option<f64>,
}

/// Group matches by deck, most wins first. Ties keep encounter order.
pub fn per_deck(matches: &[MatchRecord], decks: &[Deck]) -> Vec<DeckAggregate> {
    let mut order: Vec<Option<i64>> = Vec::new();
    let mut tallies: HashMap<Option<i64>, Tally> = HashMap::new();

    for m in matches {
        let tally = tallies.entry(m.deck_id).or_insert_with(|| {
            order.push(m.deck_id);
            Tally::default()
        });
        tally.record(m.result);
    }

    let mut rows: Vec<DeckAggregate> = order
        .into_iter()
        .map(|deck_id| {
            let tally = tallies.get(&deck_id).copied().unwrap_or_default();
            DeckAggregate {
                deck_id,
                deck_name: match deck_id {
                    Some(id) => deck_name(decks, id),
                    None => NO_DECK_LABEL.to_string(),
                },
                total: tally.total,
                wins: tally.wins,
                losses: tally.losses,
                winrate: tally.winrate(),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows
}

/// One backend deck row as shown by the deck list and the deck chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckRow {
    pub deck_id: i64,
    pub deck_name: String,
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub winrate: Option<f64>,
}

impl From<&DeckStats> for DeckRow {
    fn from(row: &DeckStats) -> Self {
        Self {
            deck_id: row.deck_id,
            deck_name: row.deck_name.clone(),
            total: row.total,
            wins: row.wins,
            losses: row.losses,
            winrate: row_winrate(row),
        }
    }
}

/// Backend deck rows, including decks that were never played.
pub fn list_rows(stats: &StatsSnapshot) -> Vec<DeckRow> {
    stats.deck_stats.iter().map(DeckRow::from).collect()
}

/// Backend deck rows with at least one match.
pub fn chart_rows(stats: &StatsSnapshot) -> Vec<DeckRow> {
    stats
        .deck_stats
        .iter()
        .filter(|d| d.total > 0)
        .map(DeckRow::from)
        .collect()
}

/// Winrate of a backend row. The backend reports `0.0` when nothing was
/// decided; that is mapped back to "no data".
pub fn row_winrate(row: &DeckStats) -> Option<f64> {
    winrate(row.wins, row.losses).map(|_| row.winrate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::record;
    use shared::MatchResult::*;

    fn decks() -> Vec<Deck> {
        vec![
            Deck { id: 1, name: "Lugia".to_string(), created: None },
            Deck { id: 2, name: "Gardevoir".to_string(), created: None },
        ]
    }

    #[test]
    fn test_scenario_per_deck() {
        let matches = vec![
            record(1, Win, Some(1)),
            record(2, Loss, Some(1)),
            record(3, Win, Some(2)),
        ];
        let rows = per_deck(&matches, &decks());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].deck_name, "Lugia");
        assert_eq!((rows[0].wins, rows[0].losses, rows[0].winrate), (1, 1, Some(50.0)));
        assert_eq!(rows[1].deck_name, "Gardevoir");
        assert_eq!((rows[1].wins, rows[1].losses, rows[1].winrate), (1, 0, Some(100.0)));
    }

    #[test]
    fn test_unknown_and_missing_decks() {
        let matches = vec![record(1, Draw, Some(9)), record(2, Loss, None)];
        let rows = per_deck(&matches, &decks());

        assert_eq!(rows[0].deck_name, "Deck #9");
        assert_eq!(rows[0].winrate, None);
        assert_eq!(rows[1].deck_id, None);
        assert_eq!(rows[1].deck_name, NO_DECK_LABEL);
    }

    #[test]
    fn test_chart_rows_skip_unplayed_decks() {
        let stats = StatsSnapshot {
            deck_stats: vec![
                DeckStats {
                    deck_id: 1,
                    deck_name: "Lugia".to_string(),
                    wins: 2,
                    losses: 1,
                    total: 3,
                    winrate: 66.7,
                },
                DeckStats {
                    deck_id: 2,
                    deck_name: "Gardevoir".to_string(),
                    wins: 0,
                    losses: 0,
                    total: 0,
                    winrate: 0.0,
                },
            ],
            ..StatsSnapshot::default()
        };

        let list = list_rows(&stats);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].winrate, None);
        assert_eq!(chart_rows(&stats).len(), 1);
        assert_eq!(row_winrate(&stats.deck_stats[1]), None);
        assert_eq!(row_winrate(&stats.deck_stats[0]), Some(66.7));
    }
}
