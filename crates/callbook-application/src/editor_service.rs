//! Collection editor use case.
//!
//! Couples a [`CollectionEditor`] with the store: loading the pool, bulk
//! populating the selection from an existing collection or from history,
//! and saving the selection as a new Session or Template.

use std::sync::Arc;

use chrono::Utc;

use callbook_core::call::{CallPredicate, CallRepository};
use callbook_core::collection::{CollectionKind, CollectionRepository};
use callbook_core::editor::{CollectionEditor, EditorOptions};
use callbook_core::error::Result;

/// Where a bulk populate takes its call names from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulateSource {
    Session(String),
    Template(String),
    /// Every call that has ever been used.
    HistoryUsed,
}

pub struct CollectionEditorService {
    calls: Arc<dyn CallRepository>,
    collections: Arc<dyn CollectionRepository>,
    editor: CollectionEditor,
}

impl CollectionEditorService {
    /// Loads the full catalog into the pool of a fresh editor.
    pub async fn open(
        calls: Arc<dyn CallRepository>,
        collections: Arc<dyn CollectionRepository>,
        options: EditorOptions,
    ) -> Result<Self> {
        let catalog = calls.fetch_all().await?;
        tracing::debug!(
            "[CollectionEditorService] opened {} editor with {} calls",
            options.selection_kind,
            catalog.len()
        );
        Ok(Self {
            editor: CollectionEditor::new(options, catalog),
            calls,
            collections,
        })
    }

    pub fn editor(&self) -> &CollectionEditor {
        &self.editor
    }

    /// Mutable access for sort, filter and alert handling.
    pub fn editor_mut(&mut self) -> &mut CollectionEditor {
        &mut self.editor
    }

    pub fn move_call(&mut self, name: &str, to_selection: bool) -> bool {
        self.editor.move_call(name, to_selection)
    }

    pub fn remove_all(&mut self) {
        self.editor.remove_all();
    }

    /// Moves every call named by `source` into the selection.
    ///
    /// Returns how many calls moved. Names that are no longer in the catalog
    /// are skipped. On a store error nothing is moved.
    pub async fn populate_from(&mut self, source: &PopulateSource) -> Result<usize> {
        let names: Vec<String> = match source {
            PopulateSource::Session(name) => self
                .collections
                .fetch_members(CollectionKind::Session, name)
                .await?
                .into_iter()
                .map(|m| m.name)
                .collect(),
            PopulateSource::Template(name) => self
                .collections
                .fetch_members(CollectionKind::Template, name)
                .await?
                .into_iter()
                .map(|m| m.name)
                .collect(),
            PopulateSource::HistoryUsed => self
                .calls
                .fetch_by_predicate(&CallPredicate::EverUsed(true))
                .await?
                .into_iter()
                .map(|c| c.name)
                .collect(),
        };

        let moved = self.editor.populate_with(&names);
        tracing::debug!(
            "[CollectionEditorService] populate from {:?}: {} of {} calls moved",
            source,
            moved,
            names.len()
        );
        Ok(moved)
    }

    /// Saves the selection as a new collection of `kind` called `name`.
    ///
    /// Returns `Ok(false)` with a warning alert when the name is empty, the
    /// selection is empty, or a collection of that kind and name already
    /// exists; nothing is written in those cases. On success the selection
    /// returns to the pool and a success alert is raised.
    ///
    /// # Errors
    ///
    /// Store failures propagate unchanged and leave the editor untouched.
    pub async fn save(&mut self, kind: CollectionKind, name: &str) -> Result<bool> {
        let name = name.trim();
        if !self.editor.validate_for_save(kind, name) {
            return Ok(false);
        }

        if self.collections.fetch_existing(kind, name).await?.is_some() {
            self.editor.reject_duplicate(kind);
            return Ok(false);
        }

        let collection = self.editor.snapshot(kind, name, Utc::now());
        self.collections.upsert(&collection).await?;
        tracing::info!(
            "[CollectionEditorService] saved {} '{}' with {} calls",
            kind,
            name,
            collection.members.len()
        );

        self.editor.complete_save(kind);
        Ok(true)
    }
}
