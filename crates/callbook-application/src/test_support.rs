//! In-memory store used by the service tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use callbook_core::call::{Call, CallPredicate, CallRepository};
use callbook_core::collection::{Collection, CollectionKind, CollectionMember, CollectionRepository};
use callbook_core::error::{CallbookError, Result};
use callbook_core::history::{History, HistoryRepository};

#[derive(Default)]
struct Inner {
    calls: Vec<Call>,
    collections: Vec<Collection>,
    history: Vec<History>,
    appended_for: Vec<String>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
    fail_writes: AtomicBool,
    fail_history: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_calls(names: &[&str]) -> Self {
        let store = Self::default();
        store.inner.try_lock().unwrap().calls = names.iter().map(|n| Call::named(*n)).collect();
        store
    }

    pub fn with_call_records(calls: Vec<Call>) -> Self {
        let store = Self::default();
        store.inner.try_lock().unwrap().calls = calls;
        store
    }

    pub async fn insert_collection(&self, collection: Collection) {
        self.inner.lock().await.collections.push(collection);
    }

    pub async fn insert_history(&self, history: History) {
        self.inner.lock().await.history.push(history);
    }

    pub async fn collection(&self, kind: CollectionKind, name: &str) -> Option<Collection> {
        self.inner
            .lock()
            .await
            .collections
            .iter()
            .find(|c| c.kind == kind && c.name == name)
            .cloned()
    }

    pub async fn history(&self) -> Vec<History> {
        self.inner.lock().await.history.clone()
    }

    pub async fn appended_for(&self) -> Vec<String> {
        self.inner.lock().await.appended_for.clone()
    }

    /// Makes every subsequent write fail as a transport error would.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Makes only `append_history` fail; other writes still succeed.
    pub fn fail_history_appends(&self) {
        self.fail_history.store(true, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CallbookError::data_access("store unavailable"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl CallRepository for InMemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Call>> {
        Ok(self.inner.lock().await.calls.clone())
    }

    async fn fetch_by_predicate(&self, predicate: &CallPredicate) -> Result<Vec<Call>> {
        let inner = self.inner.lock().await;
        let history = |name: &str| inner.history.iter().find(|h| h.name == name);
        Ok(inner
            .calls
            .iter()
            .filter(|c| match predicate {
                CallPredicate::EverUsed(wanted) => {
                    history(&c.name).map(|h| h.ever_used).unwrap_or(false) == *wanted
                }
                CallPredicate::IsNew => history(&c.name).map(|h| h.uses.is_empty()).unwrap_or(true),
                CallPredicate::Group(tag) => &c.group == tag,
            })
            .cloned()
            .collect())
    }

    async fn upsert_calls(&self, calls: &[Call]) -> Result<usize> {
        self.check_write()?;
        let mut inner = self.inner.lock().await;
        let mut added = 0;
        for call in calls {
            if !inner.calls.iter().any(|c| c.name == call.name) {
                inner.calls.push(call.clone());
                added += 1;
            }
        }
        Ok(added)
    }
}

#[async_trait]
impl CollectionRepository for InMemoryStore {
    async fn fetch_names(&self, kind: CollectionKind, only_unfinished: bool) -> Result<Vec<String>> {
        Ok(self
            .inner
            .lock()
            .await
            .collections
            .iter()
            .filter(|c| c.kind == kind && !(only_unfinished && c.finished))
            .map(|c| c.name.clone())
            .collect())
    }

    async fn fetch_members(&self, kind: CollectionKind, name: &str) -> Result<Vec<CollectionMember>> {
        self.collection(kind, name)
            .await
            .map(|c| c.members)
            .ok_or_else(|| CallbookError::not_found(kind.title(), name))
    }

    async fn fetch_existing(&self, kind: CollectionKind, name: &str) -> Result<Option<Collection>> {
        Ok(self.collection(kind, name).await)
    }

    async fn upsert(&self, collection: &Collection) -> Result<()> {
        self.check_write()?;
        let mut inner = self.inner.lock().await;
        inner
            .collections
            .retain(|c| !(c.kind == collection.kind && c.name == collection.name));
        inner.collections.push(collection.clone());
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for InMemoryStore {
    async fn fetch_history(&self, call_name: &str) -> Result<History> {
        Ok(self
            .inner
            .lock()
            .await
            .history
            .iter()
            .find(|h| h.name == call_name)
            .cloned()
            .unwrap_or_else(|| History::empty(call_name)))
    }

    async fn append_history(&self, session_name: &str, entries: &[History]) -> Result<()> {
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(CallbookError::data_access("history unavailable"));
        }
        self.check_write()?;
        let mut inner = self.inner.lock().await;
        inner.appended_for.push(session_name.to_string());
        for entry in entries {
            match inner.history.iter_mut().find(|h| h.name == entry.name) {
                Some(existing) => existing.absorb(entry),
                None => inner.history.push(entry.clone()),
            }
        }
        Ok(())
    }
}
