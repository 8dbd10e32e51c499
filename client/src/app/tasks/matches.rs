//! # Match Tasks

use shared::{MatchField, NewMatch};
use tracing::debug;

use super::{require_found, ErrorScope, TaskContext};
use crate::app::events::MatchMessage;

pub(crate) fn save(ctx: &TaskContext, new_match: NewMatch) {
    let backend = ctx.backend.clone();
    ctx.spawn("save_match", ErrorScope::Match, async move {
        let record = backend.save_match(new_match).await?;
        Ok(MatchMessage::Created(record).into())
    });
}

pub(crate) fn delete(ctx: &TaskContext, id: i64) {
    let backend = ctx.backend.clone();
    ctx.spawn("delete_match", ErrorScope::Match, async move {
        require_found(backend.delete_match(id).await?, "Match")?;
        Ok(MatchMessage::Deleted { id }.into())
    });
}

pub(crate) fn update_field(ctx: &TaskContext, id: i64, field: MatchField, value: String) {
    let backend = ctx.backend.clone();
    ctx.spawn("update_match_field", ErrorScope::Match, async move {
        require_found(backend.update_match_field(id, field, value).await?, "Match")?;
        Ok(MatchMessage::Updated { id, field }.into())
    });
}

/// Fetch matches and decks concurrently under the current season filter.
///
/// The filter is read now, not at settlement, and travels with the result.
pub(crate) fn load(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    let season = ctx.cache.season_filter();
    ctx.spawn("get_matches", ErrorScope::Matches, async move {
        let (matches, decks) = futures::join!(
            backend.get_matches(season.clone()),
            backend.get_decks()
        );
        let matches = matches?;
        let decks = decks?;
        debug!(
            season = season.as_deref().unwrap_or("all"),
            matches = matches.len(),
            decks = decks.len(),
            "Matches fetched"
        );
        Ok(MatchMessage::Loaded {
            season,
            matches,
            decks,
        }
        .into())
    });
}
