//! Collection repository trait.

use async_trait::async_trait;

use super::model::{Collection, CollectionKind, CollectionMember};
use crate::error::Result;

/// Persistence for Sessions and Templates.
///
/// Collection names are unique within a kind. Writers are not coordinated:
/// two concurrent `upsert` calls for the same name both succeed and the last
/// one wins.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Lists collection names of `kind`.
    ///
    /// With `only_unfinished`, finished sessions are left out (templates are
    /// never finished, so the flag has no effect on them).
    async fn fetch_names(&self, kind: CollectionKind, only_unfinished: bool) -> Result<Vec<String>>;

    /// Returns the members of a named collection in collection order.
    ///
    /// # Errors
    ///
    /// `CallbookError::NotFound` if no collection of that kind and name exists.
    async fn fetch_members(&self, kind: CollectionKind, name: &str) -> Result<Vec<CollectionMember>>;

    /// Looks up a collection by kind and name.
    async fn fetch_existing(&self, kind: CollectionKind, name: &str) -> Result<Option<Collection>>;

    /// Inserts or replaces the collection with the same kind and name.
    async fn upsert(&self, collection: &Collection) -> Result<()>;
}
