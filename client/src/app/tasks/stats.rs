//! # Stats Tasks

use super::{ErrorScope, TaskContext};
use crate::app::events::StatsMessage;

/// Load the stats snapshot for `season`, or for the active filter if `None`.
pub(crate) fn load(ctx: &TaskContext, season: Option<String>) {
    let backend = ctx.backend.clone();
    let season = season.or_else(|| ctx.cache.season_filter());
    ctx.spawn("get_stats", ErrorScope::Stats, async move {
        let snapshot = backend.get_stats(season).await?;
        Ok(StatsMessage::Loaded(snapshot).into())
    });
}
