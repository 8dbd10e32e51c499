//! # Aggregation Engine
//!
//! Pure functions deriving statistics from cached match records. Nothing here
//! keeps state: every view is recomputed from whatever the
//! [`crate::app::state::AnalyticsCache`] holds at the time of the call.
//!
//! ## Winrates
//!
//! Only wins and losses are decided results. A winrate is `None` ("no data")
//! whenever nothing was decided, at every granularity, and is rounded to one
//! decimal otherwise:
//!
//! ```rust
//! use tracker_client::analytics::winrate;
//!
//! assert_eq!(winrate(2, 1), Some(66.7));
//! assert_eq!(winrate(0, 0), None);
//! ```
//!
//! ## Modules
//!
//! - [`global`] - totals over all cached matches
//! - [`decks`] - per-deck grouping and chart/list views of backend stats
//! - [`opponents`] - per-opponent aggregates, sort orders, top-N and matchups
//! - [`trend`] - cumulative winrate over time
//! - [`seasons`] - per-season breakdown
//! - [`streaks`] - current and best streaks, most played deck

use serde::Serialize;
use shared::{Deck, MatchRecord, MatchResult, StatsSnapshot};

pub mod decks;
pub mod global;
pub mod opponents;
pub mod seasons;
pub mod streaks;
pub mod trend;

pub use decks::{DeckAggregate, DeckRow};
pub use global::GlobalStats;
pub use opponents::{OpponentAggregate, OpponentSort};
pub use seasons::SeasonRow;
pub use streaks::StreakSummary;
pub use trend::{Trend, TrendPoint};

/// Round a percentage to one decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Winrate in percent over decided matches, `None` when there are none.
pub fn winrate(wins: u32, losses: u32) -> Option<f64> {
    let decided = wins + losses;
    (decided > 0).then(|| round1(f64::from(wins) / f64::from(decided) * 100.0))
}

/// Running counts for one group of matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    pub fn record(&mut self, result: MatchResult) {
        self.total += 1;
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Loss => self.losses += 1,
            MatchResult::Draw | MatchResult::Unknown => {}
        }
    }

    pub fn of<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut tally = Tally::default();
        for m in matches {
            tally.record(m.result);
        }
        tally
    }

    pub fn winrate(&self) -> Option<f64> {
        winrate(self.wins, self.losses)
    }
}

/// Every derived view the dashboard renders, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub season_filter: Option<String>,
    pub global: GlobalStats,
    pub decks: Vec<DeckAggregate>,
    /// Backend deck rows with at least one match, empty until stats load
    pub deck_chart: Vec<DeckRow>,
    pub top_opponents: Vec<OpponentAggregate>,
    pub trend: Trend,
    /// `None` when fewer than two season groups exist
    pub seasons: Option<Vec<SeasonRow>>,
    pub streaks: StreakSummary,
}

/// Compute every dashboard view from a match list.
pub fn dashboard(
    matches: &[MatchRecord],
    deck_list: &[Deck],
    stats: Option<&StatsSnapshot>,
    season_filter: Option<String>,
) -> Dashboard {
    Dashboard {
        season_filter,
        global: global::global_stats(matches),
        decks: decks::per_deck(matches, deck_list),
        deck_chart: stats.map(decks::chart_rows).unwrap_or_default(),
        top_opponents: opponents::top(matches, OpponentSort::Total, opponents::TOP_OPPONENTS),
        trend: trend::cumulative(matches),
        seasons: seasons::breakdown(matches),
        streaks: streaks::summarize(matches, deck_list),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use shared::{MatchRecord, MatchResult, UNKNOWN_FIRST_PLAYER};

    /// Match with a timestamp derived from `id`, so ids are chronological.
    pub fn record(id: i64, result: MatchResult, deck_id: Option<i64>) -> MatchRecord {
        MatchRecord {
            id,
            result,
            deck_id,
            opponent: "?".to_string(),
            first_player: UNKNOWN_FIRST_PLAYER.to_string(),
            season: None,
            captured_at: format!("2025-01-01T10:{:02}:00", id),
            notes: None,
            tags: Vec::new(),
        }
    }

    pub fn against(id: i64, result: MatchResult, opponent: &str) -> MatchRecord {
        MatchRecord {
            opponent: opponent.to_string(),
            ..record(id, result, None)
        }
    }

    pub fn in_season(id: i64, result: MatchResult, season: Option<&str>) -> MatchRecord {
        MatchRecord {
            season: season.map(str::to_string),
            ..record(id, result, None)
        }
    }
}
