//! # Season Handlers

use tracing::info;

use crate::app::bus::EventBus;
use crate::app::events::{MatchMessage, SeasonMessage, StatsMessage};
use crate::app::state::AnalyticsCache;

/// Change the active season filter; blank means all seasons.
///
/// Persists the choice (best-effort) and reloads stats and matches under
/// the new filter. Loads already in flight are not cancelled.
///
/// Internal handler function - use [`crate::app::App::change_season_filter`] instead.
pub(crate) fn change_season_filter(bus: &EventBus, cache: &AnalyticsCache, season: Option<&str>) {
    let season = season
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if !cache.set_season_filter(season.clone()) {
        return;
    }
    info!(season = season.as_deref().unwrap_or("all"), "Season filter changed");

    bus.publish(SeasonMessage::ActiveSaveRequested { season }.into());
    bus.publish(StatsMessage::LoadRequested { season: None }.into());
    bus.publish(MatchMessage::LoadRequested.into());
}
