//! # Drill-down Detail Panel
//!
//! Navigation state of the statistics detail panel:
//!
//! ```text
//!              open(total)                 select deck
//!   Closed ───────────────▶ DecksList ─────────────────▶ DeckDetail(id)
//!     ▲  │                   ▲     │ ◀──────── back ──────────┘
//!     │  │ open(winrate|record)   │ tab
//!     │  └──────────────▶ OpponentsList ───────────────▶ OpponentDetail(name)
//!     │                          ◀──────── back ──────────┘
//!     └──── close / cancel (from any open state)
//! ```
//!
//! `matchup(name)` jumps to `OpponentDetail` from anywhere. The panel keeps
//! no data of its own: [`DetailPanel::render`] rebuilds the content from the
//! cache each time it is called.

use serde::Serialize;
use shared::{deck_name, normalize_opponent};

use crate::analytics::decks::{self, row_winrate, DeckRow};
use crate::analytics::opponents::{self, Matchup, OpponentAggregate, OpponentSort};
use crate::analytics::trend::{deck_trend, Trend};
use crate::analytics::Tally;

use super::state::CacheState;

/// Which stats card was clicked to open the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailKind {
    Total,
    Winrate,
    Record,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum PanelState {
    #[default]
    Closed,
    OpponentsList,
    DecksList,
    OpponentDetail(String),
    DeckDetail(i64),
}

impl PanelState {
    /// The list a detail state returns to.
    fn parent(&self) -> Option<PanelState> {
        match self {
            PanelState::OpponentDetail(_) => Some(PanelState::OpponentsList),
            PanelState::DeckDetail(_) => Some(PanelState::DecksList),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInput {
    Open(DetailKind),
    Matchup(String),
    ShowOpponents,
    ShowDecks,
    SelectOpponent(String),
    SelectDeck(i64),
    SortOpponents(OpponentSort),
    Back,
    Close,
    /// Escape key or equivalent
    Cancel,
}

/// What the panel shows in its current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PanelContent {
    Opponents {
        sort: OpponentSort,
        rows: Vec<OpponentAggregate>,
    },
    Decks {
        rows: Vec<DeckRow>,
    },
    OpponentDetail(Matchup),
    DeckDetail(DeckDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckDetail {
    pub deck_id: i64,
    pub deck_name: String,
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub winrate: Option<f64>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    state: PanelState,
    opponent_sort: OpponentSort,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PanelState::Closed
    }

    pub fn opponent_sort(&self) -> OpponentSort {
        self.opponent_sort
    }

    /// Apply one navigation input.
    ///
    /// Returns `true` when the panel must be re-rendered. Inputs that make no
    /// sense in the current state are ignored and return `false`.
    pub fn apply(&mut self, input: PanelInput) -> bool {
        let next = match (&self.state, input) {
            (PanelState::Closed, PanelInput::Open(DetailKind::Total)) => PanelState::DecksList,
            (PanelState::Closed, PanelInput::Open(_)) => PanelState::OpponentsList,
            // Already open: refresh without losing depth
            (_, PanelInput::Open(_)) => return true,

            (_, PanelInput::Matchup(name)) => PanelState::OpponentDetail(normalize_opponent(&name)),

            (PanelState::DecksList, PanelInput::ShowOpponents) => PanelState::OpponentsList,
            (PanelState::OpponentsList, PanelInput::ShowDecks) => PanelState::DecksList,

            (PanelState::OpponentsList, PanelInput::SelectOpponent(name)) => {
                PanelState::OpponentDetail(normalize_opponent(&name))
            }
            (PanelState::DecksList, PanelInput::SelectDeck(id)) => PanelState::DeckDetail(id),

            (PanelState::Closed, PanelInput::SortOpponents(_)) => return false,
            (_, PanelInput::SortOpponents(sort)) => {
                let changed = self.opponent_sort != sort;
                self.opponent_sort = sort;
                return changed;
            }

            (state, PanelInput::Back) => match state.parent() {
                Some(parent) => parent,
                None => return false,
            },

            (PanelState::Closed, PanelInput::Close | PanelInput::Cancel) => return false,
            (_, PanelInput::Close | PanelInput::Cancel) => PanelState::Closed,

            (state, input) => {
                tracing::debug!(?state, ?input, "Panel input ignored");
                return false;
            }
        };

        tracing::debug!(from = ?self.state, to = ?next, "Panel transition");
        self.state = next;
        true
    }

    /// Content for the current state, built from `cache`. `None` when closed.
    pub fn render(&self, cache: &CacheState) -> Option<PanelContent> {
        let content = match &self.state {
            PanelState::Closed => return None,
            PanelState::OpponentsList => PanelContent::Opponents {
                sort: self.opponent_sort,
                rows: opponents::ranked(&cache.matches, self.opponent_sort),
            },
            PanelState::DecksList => PanelContent::Decks {
                rows: cache
                    .stats_snapshot
                    .as_ref()
                    .map(decks::list_rows)
                    .unwrap_or_default(),
            },
            PanelState::OpponentDetail(name) => {
                PanelContent::OpponentDetail(opponents::matchup(&cache.matches, name))
            }
            PanelState::DeckDetail(id) => PanelContent::DeckDetail(deck_detail(cache, *id)),
        };
        Some(content)
    }
}

fn deck_detail(cache: &CacheState, deck_id: i64) -> DeckDetail {
    let trend = deck_trend(&cache.matches, deck_id);
    let row = cache
        .stats_snapshot
        .as_ref()
        .and_then(|s| s.deck_stats.iter().find(|d| d.deck_id == deck_id));

    match row {
        Some(row) => DeckDetail {
            deck_id,
            deck_name: row.deck_name.clone(),
            total: row.total,
            wins: row.wins,
            losses: row.losses,
            winrate: row_winrate(row),
            trend,
        },
        // Not in the backend stats (yet): count what is cached
        None => {
            let tally = Tally::of(cache.matches.iter().filter(|m| m.deck_id == Some(deck_id)));
            DeckDetail {
                deck_id,
                deck_name: deck_name(&cache.decks, deck_id),
                total: tally.total,
                wins: tally.wins,
                losses: tally.losses,
                winrate: tally.winrate(),
                trend,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{against, record};
    use shared::MatchResult::*;
    use shared::{DeckStats, StatsSnapshot};

    fn opened(kind: DetailKind) -> DetailPanel {
        let mut panel = DetailPanel::new();
        assert!(panel.apply(PanelInput::Open(kind)));
        panel
    }

    #[test]
    fn test_open_kind_selects_list() {
        assert_eq!(opened(DetailKind::Total).state(), &PanelState::DecksList);
        assert_eq!(opened(DetailKind::Winrate).state(), &PanelState::OpponentsList);
        assert_eq!(opened(DetailKind::Record).state(), &PanelState::OpponentsList);
    }

    #[test]
    fn test_drill_down_and_back() {
        let mut panel = opened(DetailKind::Winrate);
        assert!(panel.apply(PanelInput::SelectOpponent("Alice".to_string())));
        assert_eq!(panel.state(), &PanelState::OpponentDetail("Alice".to_string()));
        assert!(panel.apply(PanelInput::Back));
        assert_eq!(panel.state(), &PanelState::OpponentsList);

        let mut panel = opened(DetailKind::Total);
        assert!(panel.apply(PanelInput::SelectDeck(4)));
        assert!(panel.apply(PanelInput::Back));
        assert_eq!(panel.state(), &PanelState::DecksList);
    }

    #[test]
    fn test_reopen_keeps_depth() {
        let mut panel = opened(DetailKind::Total);
        panel.apply(PanelInput::SelectDeck(2));
        assert!(panel.apply(PanelInput::Open(DetailKind::Winrate)));
        assert_eq!(panel.state(), &PanelState::DeckDetail(2));
    }

    #[test]
    fn test_close_and_cancel_from_any_open_state() {
        let mut panel = opened(DetailKind::Winrate);
        panel.apply(PanelInput::SelectOpponent("Bob".to_string()));
        assert!(panel.apply(PanelInput::Cancel));
        assert_eq!(panel.state(), &PanelState::Closed);
        assert!(!panel.apply(PanelInput::Close));

        let mut panel = opened(DetailKind::Total);
        assert!(panel.apply(PanelInput::Close));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_invalid_inputs_are_ignored() {
        let mut panel = DetailPanel::new();
        assert!(!panel.apply(PanelInput::Back));
        assert!(!panel.apply(PanelInput::SelectDeck(1)));

        let mut panel = opened(DetailKind::Winrate);
        assert!(!panel.apply(PanelInput::SelectDeck(1)));
        assert!(!panel.apply(PanelInput::Back));
        assert_eq!(panel.state(), &PanelState::OpponentsList);
    }

    #[test]
    fn test_matchup_jumps_to_detail_and_back_to_opponents() {
        let mut panel = opened(DetailKind::Total);
        panel.apply(PanelInput::SelectDeck(1));
        assert!(panel.apply(PanelInput::Matchup("".to_string())));
        assert_eq!(panel.state(), &PanelState::OpponentDetail("?".to_string()));
        panel.apply(PanelInput::Back);
        assert_eq!(panel.state(), &PanelState::OpponentsList);
    }

    #[test]
    fn test_render_reflects_latest_cache() {
        let mut panel = opened(DetailKind::Winrate);
        let mut cache = CacheState {
            matches: vec![against(1, Win, "Alice")],
            ..CacheState::default()
        };
        let first = panel.render(&cache);

        cache.matches.push(against(2, Loss, "Bob"));
        cache.matches.push(against(3, Loss, "Bob"));
        let second = panel.render(&cache);
        assert_ne!(first, second);

        match second {
            Some(PanelContent::Opponents { rows, .. }) => assert_eq!(rows[0].name, "Bob"),
            other => panic!("unexpected content: {:?}", other),
        }

        panel.apply(PanelInput::SortOpponents(OpponentSort::Winrate));
        match panel.render(&cache) {
            Some(PanelContent::Opponents { sort, rows }) => {
                assert_eq!(sort, OpponentSort::Winrate);
                assert_eq!(rows[0].name, "Alice");
            }
            other => panic!("unexpected content: {:?}", other),
        }

        panel.apply(PanelInput::Close);
        assert_eq!(panel.render(&cache), None);
    }

    #[test]
    fn test_deck_detail_content() {
        let mut panel = opened(DetailKind::Total);
        panel.apply(PanelInput::SelectDeck(1));

        let cache = CacheState {
            matches: vec![record(1, Win, Some(1)), record(2, Loss, Some(1)), record(3, Win, Some(2))],
            stats_snapshot: Some(StatsSnapshot {
                deck_stats: vec![DeckStats {
                    deck_id: 1,
                    deck_name: "Lugia".to_string(),
                    wins: 1,
                    losses: 1,
                    total: 2,
                    winrate: 50.0,
                }],
                ..StatsSnapshot::default()
            }),
            ..CacheState::default()
        };

        match panel.render(&cache) {
            Some(PanelContent::DeckDetail(detail)) => {
                assert_eq!(detail.deck_name, "Lugia");
                assert_eq!(detail.winrate, Some(50.0));
                assert_eq!(detail.trend.points().len(), 2);
            }
            other => panic!("unexpected content: {:?}", other),
        }

        panel.apply(PanelInput::Back);
        panel.apply(PanelInput::SelectDeck(2));
        match panel.render(&cache) {
            Some(PanelContent::DeckDetail(detail)) => {
                assert_eq!(detail.deck_name, "Deck #2");
                assert_eq!(detail.total, 1);
                assert!(detail.trend.is_insufficient());
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_unplayed_deck_has_no_winrate_in_list_and_detail() {
        let cache = CacheState {
            stats_snapshot: Some(StatsSnapshot {
                deck_stats: vec![DeckStats {
                    deck_id: 7,
                    deck_name: "Charizard".to_string(),
                    wins: 0,
                    losses: 0,
                    total: 0,
                    winrate: 0.0,
                }],
                ..StatsSnapshot::default()
            }),
            ..CacheState::default()
        };

        let mut panel = opened(DetailKind::Total);
        match panel.render(&cache) {
            Some(PanelContent::Decks { rows }) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].deck_name, "Charizard");
                assert_eq!(rows[0].winrate, None);
            }
            other => panic!("unexpected content: {:?}", other),
        }

        panel.apply(PanelInput::SelectDeck(7));
        match panel.render(&cache) {
            Some(PanelContent::DeckDetail(detail)) => assert_eq!(detail.winrate, None),
            other => panic!("unexpected content: {:?}", other),
        }
    }
}
