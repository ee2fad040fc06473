//! The collection editor state machine.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::options::EditorOptions;
use super::state::EditorState;
use crate::alert::{Alert, AlertSlot};
use crate::call::{Call, SortKey, filter_calls, sort_calls};
use crate::collection::{Collection, CollectionKind};

/// Builds a Session or Template by moving calls between a pool and a selection.
///
/// The editor only holds in-memory state. Store round-trips (populating from
/// an existing collection, checking for duplicates, writing) are driven by
/// the application layer, which calls back into the editor with the results.
#[derive(Debug, Clone)]
pub struct CollectionEditor {
    options: EditorOptions,
    catalog: Vec<Call>,
    state: EditorState,
    sort_key: SortKey,
    filter_text: String,
    alerts: AlertSlot,
}

impl CollectionEditor {
    /// Creates an editor with every catalog call in the pool.
    pub fn new(options: EditorOptions, catalog: Vec<Call>) -> Self {
        let sort_key = options.default_sort;
        Self {
            state: EditorState::new(catalog.clone()),
            options,
            catalog,
            sort_key,
            filter_text: String::new(),
            alerts: AlertSlot::new(),
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// The calls loaded when the editor was created, in catalog order.
    pub fn catalog(&self) -> &[Call] {
        &self.catalog
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn pool(&self) -> &[Call] {
        self.state.pool()
    }

    pub fn selection(&self) -> &[Call] {
        self.state.selection()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// The pool as displayed: filtered by the current text, ordered by the current key.
    pub fn pool_view(&self) -> Vec<Call> {
        sort_calls(&filter_calls(self.pool(), &self.filter_text), self.sort_key)
    }

    /// The selection as displayed: always in the user's insertion order.
    pub fn selection_view(&self) -> Vec<Call> {
        sort_calls(self.selection(), SortKey::UserOrder)
    }

    /// Moves `name` into the selection or back to the pool.
    ///
    /// Returns `false` without changing anything if `name` is not in the
    /// source list.
    pub fn move_call(&mut self, name: &str, to_selection: bool) -> bool {
        match self.state.moved(name, to_selection) {
            Some(next) => {
                tracing::debug!(
                    "[CollectionEditor] moved '{}' to {}",
                    name,
                    if to_selection { "selection" } else { "pool" }
                );
                self.state = next;
                true
            }
            None => {
                tracing::debug!("[CollectionEditor] move of '{}' ignored: not in source list", name);
                false
            }
        }
    }

    /// Moves the calls named in `names` into the selection, in catalog order.
    ///
    /// Names missing from the catalog are skipped. Calls already selected stay
    /// where they are. Returns how many calls actually moved.
    pub fn populate_with(&mut self, names: &[String]) -> usize {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();

        let known: HashSet<&str> = self.catalog.iter().map(|c| c.name.as_str()).collect();
        for missing in wanted.iter().filter(|n| !known.contains(**n)) {
            tracing::debug!("[CollectionEditor] '{}' is no longer in the catalog, skipping", missing);
        }

        let ordered: Vec<String> = self
            .catalog
            .iter()
            .filter(|c| wanted.contains(c.name.as_str()))
            .map(|c| c.name.clone())
            .collect();

        ordered
            .iter()
            .filter(|name| self.move_call(name, true))
            .count()
    }

    /// Moves every selected call back to the pool.
    pub fn remove_all(&mut self) {
        self.state = self.state.with_selection_returned();
    }

    /// Drops all edits: pool back to the loaded catalog, filter cleared,
    /// sort back to the default.
    pub fn reset(&mut self) {
        self.state = EditorState::new(self.catalog.clone());
        self.filter_text.clear();
        self.sort_key = self.options.default_sort;
    }

    /// Runs the local part of save validation, raising an alert on failure.
    ///
    /// Checks, in order, that `name` is non-empty and that the selection is
    /// non-empty. The duplicate-name check needs the store and is done by the
    /// caller afterwards.
    pub fn validate_for_save(&mut self, kind: CollectionKind, name: &str) -> bool {
        if name.trim().is_empty() {
            self.alerts
                .raise(Alert::warning(format!("Please name your {}", kind.label())));
            return false;
        }
        if self.selection().is_empty() {
            self.alerts.raise(Alert::warning(format!(
                "Please add some calls to your {}",
                kind.label()
            )));
            return false;
        }
        true
    }

    /// Raises the duplicate-name alert.
    pub fn reject_duplicate(&mut self, kind: CollectionKind) {
        self.alerts.raise(Alert::warning(format!(
            "A {} with that name already exists",
            kind.label()
        )));
    }

    /// Snapshot of the selection as a collection ready to be written.
    pub fn snapshot(&self, kind: CollectionKind, name: &str, now: DateTime<Utc>) -> Collection {
        Collection::from_names(
            kind,
            name,
            self.selection().iter().map(|c| c.name.clone()),
            now,
        )
    }

    /// Finishes a successful save: success alert, selection back to the pool.
    pub fn complete_save(&mut self, kind: CollectionKind) {
        self.alerts
            .raise(Alert::success(format!("{} saved", kind.title())));
        self.remove_all();
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
