//! # Deck Tasks

use tracing::debug;

use super::{persist_config, require_found, ErrorScope, TaskContext};
use crate::app::events::DeckMessage;

pub(crate) fn create(ctx: &TaskContext, name: String) {
    let backend = ctx.backend.clone();
    ctx.spawn("create_deck", ErrorScope::Deck, async move {
        let deck = backend.create_deck(name).await?;
        Ok(DeckMessage::Created(deck).into())
    });
}

pub(crate) fn update(ctx: &TaskContext, id: i64, name: String) {
    let backend = ctx.backend.clone();
    ctx.spawn("update_deck", ErrorScope::Deck, async move {
        require_found(backend.update_deck(id, name.clone()).await?, "Deck")?;
        Ok(DeckMessage::Updated { id, name }.into())
    });
}

pub(crate) fn delete(ctx: &TaskContext, id: i64) {
    let backend = ctx.backend.clone();
    ctx.spawn("delete_deck", ErrorScope::Deck, async move {
        require_found(backend.delete_deck(id).await?, "Deck")?;
        Ok(DeckMessage::Deleted { id }.into())
    });
}

pub(crate) fn load(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("get_decks", ErrorScope::Deck, async move {
        let decks = backend.get_decks().await?;
        debug!(count = decks.len(), "Decks fetched");
        Ok(DeckMessage::Loaded(decks).into())
    });
}

/// Read-modify-write of `active_deck_id`. A failed read skips the write.
pub(crate) fn save_active(ctx: &TaskContext, deck_id: Option<i64>) {
    let backend = ctx.backend.clone();
    ctx.spawn("save_active_deck", ErrorScope::Deck, async move {
        let mut config = backend.get_config().await?;
        config.active_deck_id = deck_id;
        persist_config(backend.as_ref(), config).await?;
        Ok(DeckMessage::ActiveSaved { deck_id }.into())
    });
}
