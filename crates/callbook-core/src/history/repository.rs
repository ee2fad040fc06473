//! History repository trait.

use async_trait::async_trait;

use super::model::History;
use crate::error::Result;

/// Per-call usage history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Returns the history of `call_name`; an empty history if none was recorded.
    async fn fetch_history(&self, call_name: &str) -> Result<History>;

    /// Appends the given entries on behalf of a finished session.
    ///
    /// Each entry's `uses` are appended to the stored history of the call with
    /// the same name and `ever_used` is OR-ed in. Implementations are also
    /// responsible for refreshing the derived `num_uses`/`last_used` fields of
    /// the affected calls.
    async fn append_history(&self, session_name: &str, entries: &[History]) -> Result<()>;
}
