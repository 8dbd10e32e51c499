//! # Bridge Tasks
//!
//! One async task per backend request. Every task settles with exactly one
//! terminal message (success or scoped error), sent through the outbox and
//! published by the [`App`](crate::app::App) on its own turn.
//!
//! Tasks are never cancelled and never retried. Two requests for the same
//! resource both run and both publish, in settlement order.

pub mod calibration;
pub mod capture;
pub mod config;
pub mod decks;
pub mod export;
pub mod matches;
pub mod seasons;
pub mod stats;

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_channel::Sender;
use futures::FutureExt;
use shared::AppConfig;
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

use crate::app::events::{
    CalibrationMessage, CaptureMessage, ConfigMessage, DeckMessage, ExportMessage, MatchMessage,
    Message, SeasonMessage, StatsMessage, UiMessage,
};
use crate::app::state::AnalyticsCache;
use crate::core::service::{BackendError, BackendResult, BackendService, GENERIC_ERROR_MESSAGE};

/// Which error message a failed task publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    Deck,
    Match,
    Matches,
    Stats,
    Config,
    Capture,
    Calibration,
    Season,
    Export,
    Url,
    /// Best-effort work: failures are logged, nothing is published.
    LogOnly,
}

impl ErrorScope {
    pub fn message(self, text: String) -> Option<Message> {
        let message = match self {
            ErrorScope::Deck => DeckMessage::Error { message: text }.into(),
            ErrorScope::Match => MatchMessage::Error { message: text }.into(),
            ErrorScope::Matches => MatchMessage::LoadError { message: text }.into(),
            ErrorScope::Stats => StatsMessage::Error { message: text }.into(),
            ErrorScope::Config => ConfigMessage::Error { message: text }.into(),
            ErrorScope::Capture => CaptureMessage::Error { message: text }.into(),
            ErrorScope::Calibration => CalibrationMessage::Error { message: text }.into(),
            ErrorScope::Season => SeasonMessage::Error { message: text }.into(),
            ErrorScope::Export => ExportMessage::Error { message: text }.into(),
            ErrorScope::Url => UiMessage::UrlError { message: text }.into(),
            ErrorScope::LogOnly => return None,
        };
        Some(message)
    }
}

/// Count of tasks that have not settled yet
#[derive(Debug, Default)]
pub struct InFlight {
    count: AtomicUsize,
    settled: Notify,
}

impl InFlight {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Resolves after the next task settles.
    pub async fn settled(&self) {
        self.settled.notified().await
    }

    fn enter(self: &Arc<Self>) -> InFlightGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        InFlightGuard {
            in_flight: Arc::clone(self),
        }
    }
}

struct InFlightGuard {
    in_flight: Arc<InFlight>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.count.fetch_sub(1, Ordering::SeqCst);
        self.in_flight.settled.notify_one();
    }
}

/// Everything a task needs, cloned into each spawned future
#[derive(Clone)]
pub struct TaskContext {
    pub(crate) backend: Arc<dyn BackendService>,
    pub(crate) cache: AnalyticsCache,
    outbox: Sender<Message>,
    in_flight: Arc<InFlight>,
    runtime: Handle,
}

impl TaskContext {
    pub fn new(
        backend: Arc<dyn BackendService>,
        cache: AnalyticsCache,
        outbox: Sender<Message>,
        runtime: Handle,
    ) -> Self {
        Self {
            backend,
            cache,
            outbox,
            in_flight: Arc::new(InFlight::default()),
            runtime,
        }
    }

    pub fn in_flight(&self) -> Arc<InFlight> {
        Arc::clone(&self.in_flight)
    }

    /// Run `task` to completion and send its terminal message.
    ///
    /// A rejection publishes its text through `scope`; a transport failure
    /// or a panic publishes [`GENERIC_ERROR_MESSAGE`].
    pub(crate) fn spawn<F>(&self, op: &'static str, scope: ErrorScope, task: F)
    where
        F: Future<Output = BackendResult<Message>> + Send + 'static,
    {
        let guard = self.in_flight.enter();
        let outbox = self.outbox.clone();
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("backend", op, %request_id);

        self.runtime.spawn(
            async move {
                let _guard = guard;
                debug!("Backend call started");

                let message = match AssertUnwindSafe(task).catch_unwind().await {
                    Ok(Ok(message)) => {
                        info!(topic = %message.topic(), "Backend call settled");
                        Some(message)
                    }
                    Ok(Err(e)) => {
                        match &e {
                            BackendError::Rejected(reason) => {
                                info!(reason = %reason, "Backend rejected request")
                            }
                            BackendError::Transport(cause) => {
                                error!(cause = %cause, "Backend call failed")
                            }
                        }
                        if scope == ErrorScope::LogOnly {
                            warn!(error = %e, "Best-effort call failed, not surfaced");
                        }
                        scope.message(e.user_message())
                    }
                    Err(_) => {
                        error!("Backend task panicked");
                        scope.message(GENERIC_ERROR_MESSAGE.to_string())
                    }
                };

                if let Some(message) = message {
                    if outbox.send(message).await.is_err() {
                        warn!("Outbox closed, result dropped");
                    }
                }
            }
            .instrument(span),
        );
    }
}

/// `save_config`, with a `false` reply turned into a rejection.
pub(crate) async fn persist_config(
    backend: &dyn BackendService,
    config: AppConfig,
) -> BackendResult<()> {
    if backend.save_config(config).await? {
        Ok(())
    } else {
        Err(BackendError::Rejected(
            "Failed to save configuration".to_string(),
        ))
    }
}

/// Turn a `false` reply of an update/delete call into a rejection.
pub(crate) fn require_found(found: bool, what: &str) -> BackendResult<()> {
    if found {
        Ok(())
    } else {
        Err(BackendError::Rejected(format!("{} not found", what)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_scopes() {
        let msg = ErrorScope::Matches.message("boom".to_string()).unwrap();
        assert_eq!(msg.topic().as_str(), "matches-error");
        assert_eq!(msg.error_text(), Some("boom"));

        let url = ErrorScope::Url.message("x".to_string()).unwrap();
        assert_eq!(url.topic().as_str(), "url-error");

        assert!(ErrorScope::LogOnly.message("x".to_string()).is_none());
    }

    #[test]
    fn test_require_found() {
        assert!(require_found(true, "Deck").is_ok());
        assert_eq!(
            require_found(false, "Deck"),
            Err(BackendError::Rejected("Deck not found".to_string()))
        );
    }
}
