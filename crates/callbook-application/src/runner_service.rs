//! Session runner use case.

use std::sync::Arc;

use chrono::Utc;

use callbook_core::alert::Alert;
use callbook_core::collection::{CollectionKind, CollectionRepository};
use callbook_core::error::{CallbookError, Result};
use callbook_core::history::HistoryRepository;
use callbook_core::runner::SessionRunner;

/// Runs one unfinished session at a time and records its completion.
pub struct SessionRunnerService {
    collections: Arc<dyn CollectionRepository>,
    history: Arc<dyn HistoryRepository>,
    runner: SessionRunner,
}

impl SessionRunnerService {
    pub fn new(collections: Arc<dyn CollectionRepository>, history: Arc<dyn HistoryRepository>) -> Self {
        Self {
            collections,
            history,
            runner: SessionRunner::new(),
        }
    }

    pub fn runner(&self) -> &SessionRunner {
        &self.runner
    }

    pub fn runner_mut(&mut self) -> &mut SessionRunner {
        &mut self.runner
    }

    /// Names of the sessions that can still be run.
    pub async fn runnable_sessions(&self) -> Result<Vec<String>> {
        self.collections.fetch_names(CollectionKind::Session, true).await
    }

    /// Loads the named session for running.
    ///
    /// Returns `Ok(false)` with a warning alert if the session is already finished.
    pub async fn load(&mut self, name: &str) -> Result<bool> {
        let session = self
            .collections
            .fetch_existing(CollectionKind::Session, name)
            .await?
            .ok_or_else(|| CallbookError::not_found("Session", name))?;
        Ok(self.runner.load(&session, Utc::now()))
    }

    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        self.runner.toggle(name)
    }

    /// Writes the run back: one History use per entry marked used, then the
    /// session with every entry and the finished flag. Clears the runner and
    /// raises a success alert.
    ///
    /// A failed history write leaves the stored session unfinished.
    ///
    /// Returns `Ok(false)` with a warning when no session is loaded.
    pub async fn finish(&mut self) -> Result<bool> {
        let now = Utc::now();
        let Some(session) = self.runner.finished_session(now) else {
            self.runner
                .raise_alert(Alert::warning("No session is being run"));
            return Ok(false);
        };
        let uses = self.runner.history_entries();

        self.history.append_history(&session.name, &uses).await?;
        self.collections.upsert(&session).await?;
        tracing::info!(
            "[SessionRunnerService] finished '{}': {} of {} calls used",
            session.name,
            uses.len(),
            session.members.len()
        );

        self.runner.complete();
        Ok(true)
    }
}
