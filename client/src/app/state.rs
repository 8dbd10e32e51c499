//! # Analytics Cache
//!
//! The last data received from the backend, plus the active season filter.
//!
//! One [`AnalyticsCache`] is created by [`crate::app::App::new`] and handed by
//! clone (it is an `Arc` inside) to the bridge, the panel and renderers. It
//! lives as long as the process; there is no teardown.
//!
//! Writes are `pub(crate)`: only the App's completion listeners and the
//! explicit season-filter action change it. Reads take a short shared lock.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use shared::{Deck, MatchRecord, StatsSnapshot};

use crate::analytics::{self, Dashboard};

/// Cached backend data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheState {
    pub matches: Vec<MatchRecord>,
    pub decks: Vec<Deck>,
    pub stats_snapshot: Option<StatsSnapshot>,
    /// `None` means all seasons
    pub active_season_filter: Option<String>,
    /// Seasons offered by the filter selector
    pub seasons: Vec<String>,
}

/// Shared handle to the process-wide [`CacheState`]
#[derive(Debug, Clone, Default)]
pub struct AnalyticsCache {
    inner: Arc<RwLock<CacheState>>,
}

impl AnalyticsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared read access. Keep the guard short-lived.
    pub fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.inner.read()
    }

    pub fn snapshot(&self) -> CacheState {
        self.inner.read().clone()
    }

    pub fn season_filter(&self) -> Option<String> {
        self.inner.read().active_season_filter.clone()
    }

    /// Every dashboard view, recomputed from the current contents.
    pub fn dashboard(&self) -> Dashboard {
        let state = self.inner.read();
        analytics::dashboard(
            &state.matches,
            &state.decks,
            state.stats_snapshot.as_ref(),
            state.active_season_filter.clone(),
        )
    }

    /// Replace matches and decks wholesale.
    ///
    /// Returns `false` when `season` is not the active filter, i.e. the data
    /// was requested under an older filter. It is applied anyway.
    pub(crate) fn replace_matches(
        &self,
        season: Option<String>,
        matches: Vec<MatchRecord>,
        decks: Vec<Deck>,
    ) -> bool {
        let mut state = self.inner.write();
        state.matches = matches;
        state.decks = decks;
        state.active_season_filter == season
    }

    pub(crate) fn replace_stats(&self, snapshot: StatsSnapshot) {
        self.inner.write().stats_snapshot = Some(snapshot);
    }

    pub(crate) fn replace_seasons(&self, seasons: Vec<String>) {
        self.inner.write().seasons = seasons;
    }

    /// Returns `true` when the filter changed.
    pub(crate) fn set_season_filter(&self, season: Option<String>) -> bool {
        let mut state = self.inner.write();
        if state.active_season_filter == season {
            return false;
        }
        state.active_season_filter = season;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::record;
    use shared::MatchResult::*;
    use shared::DeckStats;

    #[test]
    fn test_replace_is_wholesale() {
        let cache = AnalyticsCache::new();
        cache.replace_matches(None, vec![record(1, Win, None), record(2, Loss, None)], vec![]);
        cache.replace_matches(None, vec![record(3, Draw, None)], vec![]);

        let state = cache.read();
        assert_eq!(state.matches.len(), 1);
        assert_eq!(state.matches[0].id, 3);
    }

    #[test]
    fn test_replace_reports_filter_mismatch() {
        let cache = AnalyticsCache::new();
        assert!(cache.set_season_filter(Some("S2".to_string())));
        assert!(!cache.set_season_filter(Some("S2".to_string())));

        assert!(!cache.replace_matches(Some("S1".to_string()), vec![record(1, Win, None)], vec![]));
        assert_eq!(cache.read().matches.len(), 1);
        assert!(cache.replace_matches(Some("S2".to_string()), vec![], vec![]));
    }

    #[test]
    fn test_dashboard_reads_current_contents() {
        let cache = AnalyticsCache::new();
        assert_eq!(cache.dashboard().global.winrate, None);

        cache.replace_matches(None, vec![record(1, Win, None)], vec![]);
        assert_eq!(cache.dashboard().global.winrate, Some(100.0));
    }

    #[test]
    fn test_dashboard_deck_chart_from_stats() {
        let cache = AnalyticsCache::new();
        cache.replace_stats(StatsSnapshot {
            deck_stats: vec![
                DeckStats {
                    deck_id: 1,
                    deck_name: "Lugia".to_string(),
                    wins: 1,
                    losses: 0,
                    total: 1,
                    winrate: 100.0,
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
        });

        let chart = cache.dashboard().deck_chart;
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].deck_name, "Lugia");
        assert_eq!(chart[0].winrate, Some(100.0));
    }
}
