//! Running a session: marking calls used and producing the completion records.

use chrono::{DateTime, Utc};

use crate::alert::{Alert, AlertSlot};
use crate::collection::{Collection, CollectionKind, CollectionMember};
use crate::history::History;

/// One call of the session being run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub name: String,
    pub used: bool,
    /// Time of the last toggle (load time until the first toggle).
    pub timestamp: DateTime<Utc>,
}

/// In-memory state of a session while it is being run.
///
/// Entries are toggled in place and never reordered or removed.
#[derive(Debug, Clone, Default)]
pub struct SessionRunner {
    session_name: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
    entries: Vec<RunEntry>,
    alerts: AlertSlot,
}

impl SessionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `session`, marking every entry unused and stamping it with `now`.
    ///
    /// Returns `false` and raises a warning if `session` is not a runnable
    /// session; the current state is kept in that case.
    pub fn load(&mut self, session: &Collection, now: DateTime<Utc>) -> bool {
        if !session.is_runnable() {
            let message = if session.kind == CollectionKind::Session {
                "That session is already finished"
            } else {
                "Only sessions can be run"
            };
            self.alerts.raise(Alert::warning(message));
            return false;
        }

        self.session_name = Some(session.name.clone());
        self.loaded_at = Some(now);
        self.entries = session
            .members
            .iter()
            .map(|m| RunEntry {
                name: m.name.clone(),
                used: false,
                timestamp: now,
            })
            .collect();
        tracing::debug!(
            "[SessionRunner] loaded '{}' with {} calls",
            session.name,
            self.entries.len()
        );
        true
    }

    pub fn session_name(&self) -> Option<&str> {
        self.session_name.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.session_name.is_some()
    }

    pub fn entries(&self) -> &[RunEntry] {
        &self.entries
    }

    pub fn used_count(&self) -> usize {
        self.entries.iter().filter(|e| e.used).count()
    }

    /// Flips the `used` flag of `name`, stamping it with the current time.
    ///
    /// Returns the new flag, or `None` if the session has no such call.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        self.toggle_at(name, Utc::now())
    }

    /// [`toggle`](Self::toggle) with an explicit clock reading.
    ///
    /// Timestamps never go below the load time.
    pub fn toggle_at(&mut self, name: &str, now: DateTime<Utc>) -> Option<bool> {
        let floor = self.loaded_at.unwrap_or(now);
        let entry = self.entries.iter_mut().find(|e| e.name == name)?;
        entry.used = !entry.used;
        entry.timestamp = now.max(floor);
        tracing::debug!("[SessionRunner] '{}' used={}", name, entry.used);
        Some(entry.used)
    }

    /// The session record to write back on completion.
    ///
    /// Every entry is included with its `used` flag and timestamp.
    pub fn finished_session(&self, now: DateTime<Utc>) -> Option<Collection> {
        let name = self.session_name.clone()?;
        Some(Collection {
            name,
            kind: CollectionKind::Session,
            finished: true,
            finished_at: Some(now),
            members: self
                .entries
                .iter()
                .map(|e| CollectionMember {
                    name: e.name.clone(),
                    used: e.used,
                    timestamp: Some(e.timestamp),
                })
                .collect(),
        })
    }

    /// History uses to append on completion: one per entry marked used.
    pub fn history_entries(&self) -> Vec<History> {
        self.entries
            .iter()
            .filter(|e| e.used)
            .map(|e| History::single_use(e.name.clone(), e.timestamp))
            .collect()
    }

    /// Drops the loaded session and raises the completion alert.
    pub fn complete(&mut self) {
        if let Some(name) = self.session_name.take() {
            tracing::debug!("[SessionRunner] completed '{}'", name);
        }
        self.loaded_at = None;
        self.entries.clear();
        self.alerts.raise(Alert::success("Session saved"));
    }

    pub fn raise_alert(&mut self, alert: Alert) {
        self.alerts.raise(alert);
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alerts.current()
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alerts.dismiss()
    }
}
