//! Catalog browsing and import.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use callbook_core::call::{Call, CallRepository, SortKey, filter_calls, sort_calls};
use callbook_core::error::{CallbookError, Result};
use callbook_infrastructure::dto::CallCatalogDocument;

pub struct CatalogService {
    calls: Arc<dyn CallRepository>,
}

impl CatalogService {
    pub fn new(calls: Arc<dyn CallRepository>) -> Self {
        Self { calls }
    }

    /// The catalog filtered by `filter_text` and ordered by `sort`.
    pub async fn browse(&self, sort: SortKey, filter_text: &str) -> Result<Vec<Call>> {
        let all = self.calls.fetch_all().await?;
        Ok(sort_calls(&filter_calls(&all, filter_text), sort))
    }

    /// Adds or updates calls after checking names are present and unique.
    ///
    /// Returns the number of calls that were new to the catalog.
    pub async fn import_calls(&self, calls: &[Call]) -> Result<usize> {
        let mut seen = HashSet::new();
        for call in calls {
            let name = call.name.trim();
            if name.is_empty() {
                return Err(CallbookError::validation("call without a name"));
            }
            if !seen.insert(name) {
                return Err(CallbookError::validation(format!(
                    "call '{}' is listed twice",
                    name
                )));
            }
        }

        let cleaned: Vec<Call> = calls
            .iter()
            .map(|c| Call::new(c.name.trim(), c.group.trim(), c.plus_or_basic.trim()))
            .collect();
        self.calls.upsert_calls(&cleaned).await
    }

    /// Imports a `[[calls]]` TOML file.
    pub async fn import_file(&self, path: &Path) -> Result<usize> {
        let body = tokio::fs::read_to_string(path).await?;
        let document: CallCatalogDocument = toml::from_str(&body)?;
        tracing::info!(
            "[CatalogService] importing {} calls from {}",
            document.calls.len(),
            path.display()
        );
        self.import_calls(&document.calls).await
    }
}
