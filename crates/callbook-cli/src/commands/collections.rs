use anyhow::Result;

use callbook_core::collection::{CollectionKind, CollectionRepository};

use super::AppContext;

/// `callbook sessions` / `callbook templates`
pub async fn list(ctx: &AppContext, kind: CollectionKind, only_unfinished: bool) -> Result<bool> {
    let names = ctx.store.fetch_names(kind, only_unfinished).await?;
    if names.is_empty() {
        println!("(no {}s)", kind.label());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(true)
}
