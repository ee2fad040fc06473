//! Review use case: answering "which calls" questions over the catalog.

use std::sync::Arc;

use callbook_core::call::{Call, CallRepository, distinct_groups};
use callbook_core::collection::{CollectionKind, CollectionRepository};
use callbook_core::error::{CallbookError, Result};
use callbook_core::history::{History, HistoryRepository};
use callbook_core::review::{ReviewFilter, restrict_to_members, review_order};

pub struct ReviewService {
    calls: Arc<dyn CallRepository>,
    collections: Arc<dyn CollectionRepository>,
    history: Arc<dyn HistoryRepository>,
}

impl ReviewService {
    pub fn new(
        calls: Arc<dyn CallRepository>,
        collections: Arc<dyn CollectionRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            calls,
            collections,
            history,
        }
    }

    /// Calls matching `filter`, always in alphabetical order.
    pub async fn select(&self, filter: &ReviewFilter) -> Result<Vec<Call>> {
        if let Some(predicate) = filter.predicate() {
            let calls = self.calls.fetch_by_predicate(&predicate).await?;
            return Ok(review_order(&calls));
        }

        let catalog = self.calls.fetch_all().await?;
        match filter {
            ReviewFilter::Session(name) => {
                let members: Vec<String> = self
                    .collections
                    .fetch_members(CollectionKind::Session, name)
                    .await?
                    .into_iter()
                    .map(|m| m.name)
                    .collect();
                Ok(restrict_to_members(&catalog, &members))
            }
            _ => Ok(review_order(&catalog)),
        }
    }

    /// Usage history of one catalog call; empty when it has never been used.
    ///
    /// # Errors
    ///
    /// `NotFound` when `name` is not in the catalog.
    pub async fn call_history(&self, name: &str) -> Result<History> {
        let known = self.calls.fetch_all().await?.iter().any(|c| c.name == name);
        if !known {
            return Err(CallbookError::not_found("Call", name));
        }
        self.history.fetch_history(name).await
    }

    /// Group tags available for the group filter.
    pub async fn groups(&self) -> Result<Vec<String>> {
        Ok(distinct_groups(&self.calls.fetch_all().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryStore;
    use callbook_core::collection::Collection;
    use chrono::{Duration, Utc};

    fn names(calls: &[Call]) -> Vec<&str> {
        calls.iter().map(|c| c.name.as_str()).collect()
    }

    async fn fixture() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::with_call_records(vec![
            Call::new("Zoom", "moves", "plus").with_usage(9, None),
            Call::new("Circulate", "moves", "basic"),
            Call::new("Bend the Line", "lines", "basic"),
            Call::new("Acey Deucey", "waves", "plus"),
        ]));
        store.insert_history(History::single_use("Zoom", Utc::now())).await;
        store.insert_history(History::single_use("Acey Deucey", Utc::now())).await;
        store
            .insert_collection(Collection::from_names(
                CollectionKind::Session,
                "Monday",
                ["Zoom", "Bend the Line"],
                Utc::now(),
            ))
            .await;
        store
    }

    #[tokio::test]
    async fn test_all_is_alphabetical() {
        let store = fixture().await;
        let service = ReviewService::new(store.clone(), store.clone(), store.clone());
        let all = service.select(&ReviewFilter::All).await.unwrap();
        assert_eq!(names(&all), vec!["Acey Deucey", "Bend the Line", "Circulate", "Zoom"]);
    }

    #[tokio::test]
    async fn test_used_unused_and_new() {
        let store = fixture().await;
        let service = ReviewService::new(store.clone(), store.clone(), store.clone());

        let used = service.select(&ReviewFilter::EverUsed).await.unwrap();
        assert_eq!(names(&used), vec!["Acey Deucey", "Zoom"]);

        let unused = service.select(&ReviewFilter::NeverUsed).await.unwrap();
        assert_eq!(names(&unused), vec!["Bend the Line", "Circulate"]);

        let new = service.select(&ReviewFilter::New).await.unwrap();
        assert_eq!(names(&new), vec!["Bend the Line", "Circulate"]);
    }

    #[tokio::test]
    async fn test_session_and_group() {
        let store = fixture().await;
        let service = ReviewService::new(store.clone(), store.clone(), store.clone());

        let session = service
            .select(&ReviewFilter::Session("Monday".into()))
            .await
            .unwrap();
        assert_eq!(names(&session), vec!["Bend the Line", "Zoom"]);

        let moves = service
            .select(&ReviewFilter::Group("moves".into()))
            .await
            .unwrap();
        assert_eq!(names(&moves), vec!["Circulate", "Zoom"]);

        assert_eq!(
            service.groups().await.unwrap(),
            vec!["lines".to_string(), "moves".to_string(), "waves".to_string()]
        );
    }

    #[tokio::test]
    async fn test_call_history_lists_uses() {
        let store = fixture().await;
        let earlier = Utc::now() - Duration::days(7);
        store.insert_history(History::single_use("Circulate", earlier)).await;
        let service = ReviewService::new(store.clone(), store.clone(), store.clone());

        let used = service.call_history("Circulate").await.unwrap();
        assert!(used.ever_used);
        assert_eq!(used.uses, vec![earlier]);

        let never = service.call_history("Bend the Line").await.unwrap();
        assert!(!never.ever_used);
        assert!(never.uses.is_empty());
    }

    #[tokio::test]
    async fn test_call_history_of_unknown_call_is_not_found() {
        let store = fixture().await;
        let service = ReviewService::new(store.clone(), store.clone(), store.clone());
        assert!(service.call_history("Nope").await.unwrap_err().is_not_found());
    }
}
