//! # Configuration Tasks

use super::{ErrorScope, TaskContext};
use crate::app::events::ConfigMessage;

pub(crate) fn load(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("get_config", ErrorScope::Config, async move {
        let config = backend.get_config().await?;
        Ok(ConfigMessage::Loaded(config).into())
    });
}

/// Let the user draw the capture region, then reload the configuration
/// that now holds it.
pub(crate) fn select_region(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("start_region_selection", ErrorScope::Config, async move {
        let selection = backend.start_region_selection().await?;
        tracing::info!(region = ?selection.region, "Capture region selected");
        let config = backend.get_config().await?;
        Ok(ConfigMessage::RegionSelected(config).into())
    });
}
