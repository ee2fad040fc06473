//! TOML-backed store for calls, collections and history.
//!
//! Directory structure:
//! ```text
//! data_dir/
//! ├── calls.toml
//! ├── sessions.toml
//! ├── templates.toml
//! └── history.toml
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::Mutex;

use callbook_core::call::{Call, CallPredicate, CallRepository};
use callbook_core::collection::{Collection, CollectionKind, CollectionMember, CollectionRepository};
use callbook_core::error::{CallbookError, Result};
use callbook_core::history::{History, HistoryRepository};

use crate::dto::{CallCatalogDocument, CollectionDocument, HistoryDocument};
use crate::paths::{CallbookPaths, StoreFile};
use crate::storage::{AtomicTomlFile, StorageError};

/// File store implementing every repository trait of the core.
///
/// Each document is rewritten whole on every write. Writes that touch two
/// documents (history plus the derived call statistics) are serialised
/// in-process by `write_lock`.
pub struct TomlCallStore {
    calls: AtomicTomlFile<CallCatalogDocument>,
    sessions: AtomicTomlFile<CollectionDocument>,
    templates: AtomicTomlFile<CollectionDocument>,
    history: AtomicTomlFile<HistoryDocument>,
    write_lock: Mutex<()>,
}

impl TomlCallStore {
    /// Creates a store under `data_dir`, or the platform data directory when `None`.
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let paths = CallbookPaths::new(data_dir);
        let path = |f: StoreFile| {
            paths
                .store_file(f)
                .map_err(|e| CallbookError::config(e.to_string()))
        };

        let store = Self {
            calls: AtomicTomlFile::new(path(StoreFile::Calls)?),
            sessions: AtomicTomlFile::new(path(StoreFile::Sessions)?),
            templates: AtomicTomlFile::new(path(StoreFile::Templates)?),
            history: AtomicTomlFile::new(path(StoreFile::History)?),
            write_lock: Mutex::new(()),
        };
        tracing::debug!("[TomlCallStore] using {:?}", store.calls.path().parent());
        Ok(store)
    }

    fn collections(&self, kind: CollectionKind) -> &AtomicTomlFile<CollectionDocument> {
        match kind {
            CollectionKind::Session => &self.sessions,
            CollectionKind::Template => &self.templates,
        }
    }

    async fn load_calls(&self) -> Result<Vec<Call>> {
        let file = self.calls.clone();
        Ok(blocking(move || file.load_or_default()).await?.calls)
    }

    async fn load_history(&self) -> Result<Vec<History>> {
        let file = self.history.clone();
        Ok(blocking(move || file.load_or_default()).await?.entries)
    }

    async fn load_collections(&self, kind: CollectionKind) -> Result<Vec<Collection>> {
        let file = self.collections(kind).clone();
        Ok(blocking(move || file.load_or_default()).await?.collections)
    }
}

/// Runs blocking file work off the async executor.
async fn blocking<R, F>(f: F) -> Result<R>
where
    F: FnOnce() -> std::result::Result<R, StorageError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(e.to_string()))?
        .map_err(Into::into)
}

#[async_trait]
impl CallRepository for TomlCallStore {
    async fn fetch_all(&self) -> Result<Vec<Call>> {
        self.load_calls().await
    }

    async fn fetch_by_predicate(&self, predicate: &CallPredicate) -> Result<Vec<Call>> {
        let calls = self.load_calls().await?;

        if let CallPredicate::Group(tag) = predicate {
            return Ok(calls.into_iter().filter(|c| &c.group == tag).collect());
        }

        // ever-used and new are both answered from history

        let history: HashMap<String, History> = self
            .load_history()
            .await?
            .into_iter()
            .map(|h| (h.name.clone(), h))
            .collect();

        let matches = |call: &Call| {
            let entry = history.get(&call.name);
            match predicate {
                CallPredicate::EverUsed(wanted) => {
                    entry.map(|h| h.ever_used).unwrap_or(false) == *wanted
                }
                CallPredicate::IsNew => entry.map(|h| h.uses.is_empty()).unwrap_or(true),
                CallPredicate::Group(tag) => &call.group == tag,
            }
        };

        Ok(calls.into_iter().filter(|c| matches(c)).collect())
    }

    async fn upsert_calls(&self, calls: &[Call]) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let file = self.calls.clone();
        let incoming = calls.to_vec();

        let added = blocking(move || {
            file.update(|doc| {
                let mut added: usize = 0;
                for call in incoming {
                    match doc.calls.iter_mut().find(|c| c.name == call.name) {
                        Some(existing) => {
                            existing.group = call.group;
                            existing.plus_or_basic = call.plus_or_basic;
                        }
                        None => {
                            doc.calls
                                .push(Call::new(call.name, call.group, call.plus_or_basic));
                            added += 1;
                        }
                    }
                }
                Ok(added)
            })
        })
        .await?;

        tracing::info!("[TomlCallStore] upserted {} calls ({} new)", calls.len(), added);
        Ok(added)
    }
}

#[async_trait]
impl CollectionRepository for TomlCallStore {
    async fn fetch_names(&self, kind: CollectionKind, only_unfinished: bool) -> Result<Vec<String>> {
        Ok(self
            .load_collections(kind)
            .await?
            .into_iter()
            .filter(|c| !(only_unfinished && c.finished))
            .map(|c| c.name)
            .collect())
    }

    async fn fetch_members(&self, kind: CollectionKind, name: &str) -> Result<Vec<CollectionMember>> {
        self.fetch_existing(kind, name)
            .await?
            .map(|c| c.members)
            .ok_or_else(|| CallbookError::not_found(kind.title(), name))
    }

    async fn fetch_existing(&self, kind: CollectionKind, name: &str) -> Result<Option<Collection>> {
        Ok(self
            .load_collections(kind)
            .await?
            .into_iter()
            .find(|c| c.name == name))
    }

    async fn upsert(&self, collection: &Collection) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let file = self.collections(collection.kind).clone();
        let record = collection.clone();

        blocking(move || {
            file.update(|doc| {
                match doc.collections.iter_mut().find(|c| c.name == record.name) {
                    Some(existing) => *existing = record,
                    None => doc.collections.push(record),
                }
                Ok(())
            })
        })
        .await?;

        tracing::info!(
            "[TomlCallStore] saved {} '{}' ({} calls, finished={})",
            collection.kind,
            collection.name,
            collection.members.len(),
            collection.finished
        );
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for TomlCallStore {
    async fn fetch_history(&self, call_name: &str) -> Result<History> {
        Ok(self
            .load_history()
            .await?
            .into_iter()
            .find(|h| h.name == call_name)
            .unwrap_or_else(|| History::empty(call_name)))
    }

    async fn append_history(&self, session_name: &str, entries: &[History]) -> Result<()> {
        if entries.is_empty() {
            tracing::debug!("[TomlCallStore] nothing to append for session '{}'", session_name);
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;

        let history_file = self.history.clone();
        let incoming = entries.to_vec();
        let refreshed: Vec<History> = blocking(move || {
            history_file.update(|doc| {
                let mut touched = Vec::with_capacity(incoming.len());
                for entry in &incoming {
                    let position = match doc.entries.iter().position(|h| h.name == entry.name) {
                        Some(pos) => pos,
                        None => {
                            doc.entries.push(History::empty(entry.name.clone()));
                            doc.entries.len() - 1
                        }
                    };
                    doc.entries[position].absorb(entry);
                    touched.push(doc.entries[position].clone());
                }
                Ok(touched)
            })
        })
        .await?;

        // derived statistics on the catalog
        let calls_file = self.calls.clone();
        let stats: HashMap<String, History> = refreshed
            .into_iter()
            .map(|h| (h.name.clone(), h))
            .collect();
        blocking(move || {
            calls_file.update(|doc| {
                for call in doc.calls.iter_mut() {
                    if let Some(h) = stats.get(&call.name) {
                        call.num_uses = h.num_uses();
                        call.last_used = h.last_used();
                    }
                }
                Ok(())
            })
        })
        .await?;

        tracing::info!(
            "[TomlCallStore] appended {} history uses for session '{}'",
            entries.len(),
            session_name
        );
        Ok(())
    }
}
