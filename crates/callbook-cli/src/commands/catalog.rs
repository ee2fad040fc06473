use std::path::Path;

use anyhow::Result;

use callbook_application::{CatalogService, ReviewService};
use callbook_core::call::SortKey;

use super::{AppContext, print_calls};

/// `callbook calls`
pub async fn list(ctx: &AppContext, sort: Option<&str>, filter: &str) -> Result<bool> {
    let key = sort
        .map(SortKey::from_key)
        .unwrap_or_else(|| ctx.config.sort_key());
    let service = CatalogService::new(ctx.store.clone());
    let calls = service.browse(key, filter).await?;
    print_calls(&calls);
    Ok(true)
}

/// `callbook groups`
pub async fn groups(ctx: &AppContext) -> Result<bool> {
    let service = ReviewService::new(ctx.store.clone(), ctx.store.clone(), ctx.store.clone());
    for group in service.groups().await? {
        println!("{}", group);
    }
    Ok(true)
}

/// `callbook import FILE`
pub async fn import(ctx: &AppContext, file: &Path) -> Result<bool> {
    let service = CatalogService::new(ctx.store.clone());
    let added = service.import_file(file).await?;
    println!("✓ Imported {} new calls from {}", added, file.display());
    Ok(true)
}
