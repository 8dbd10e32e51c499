//! # Season Tasks
//!
//! Loading and saving the persisted active season is best-effort: failures
//! are logged and never published.

use super::{persist_config, ErrorScope, TaskContext};
use crate::app::events::SeasonMessage;

pub(crate) fn load(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("get_seasons", ErrorScope::Season, async move {
        let seasons = backend.get_seasons().await?;
        Ok(SeasonMessage::Loaded(seasons).into())
    });
}

pub(crate) fn load_active(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("load_active_season", ErrorScope::LogOnly, async move {
        let config = backend.get_config().await?;
        let season = config.active_season.filter(|s| !s.trim().is_empty());
        Ok(SeasonMessage::ActiveLoaded { season }.into())
    });
}

pub(crate) fn save_active(ctx: &TaskContext, season: Option<String>) {
    let backend = ctx.backend.clone();
    ctx.spawn("save_active_season", ErrorScope::LogOnly, async move {
        let mut config = backend.get_config().await?;
        config.active_season = season.clone();
        persist_config(backend.as_ref(), config).await?;
        Ok(SeasonMessage::ActiveSaved { season }.into())
    });
}
