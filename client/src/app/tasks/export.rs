//! # Export and External Link Tasks

use super::{ErrorScope, TaskContext};
use crate::app::events::{ExportMessage, UiMessage};

pub(crate) fn csv(ctx: &TaskContext) {
    let backend = ctx.backend.clone();
    ctx.spawn("export_matches_csv", ErrorScope::Export, async move {
        let result = backend.export_matches_csv().await?;
        tracing::info!(path = %result.path, "Matches exported");
        Ok(ExportMessage::CsvCompleted { path: result.path }.into())
    });
}

pub(crate) fn open_url(ctx: &TaskContext, url: String) {
    let backend = ctx.backend.clone();
    ctx.spawn("open_external_url", ErrorScope::Url, async move {
        backend.open_external_url(url.clone()).await?;
        Ok(UiMessage::UrlOpened { url }.into())
    });
}
