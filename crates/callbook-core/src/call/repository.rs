//! Call repository trait.

use async_trait::async_trait;

use super::model::{Call, CallPredicate};
use crate::error::Result;

/// Read access to the call catalog.
///
/// Implementations own `num_uses`/`last_used`: the core never writes them.
#[async_trait]
pub trait CallRepository: Send + Sync {
    /// Returns the full catalog in storage order.
    async fn fetch_all(&self) -> Result<Vec<Call>>;

    /// Returns the calls matching `predicate`, in storage order.
    async fn fetch_by_predicate(&self, predicate: &CallPredicate) -> Result<Vec<Call>>;

    /// Inserts new calls and updates the tags of existing ones (matched by name).
    ///
    /// Usage statistics of existing calls are preserved.
    ///
    /// # Returns
    ///
    /// The number of calls that were newly added.
    async fn upsert_calls(&self, calls: &[Call]) -> Result<usize>;
}
