use anyhow::Result;

use callbook_application::ReviewService;
use callbook_core::review::ReviewFilter;

use super::{AppContext, print_calls};

/// `callbook review ...`
pub async fn execute(ctx: &AppContext, filter: &ReviewFilter) -> Result<bool> {
    let service = ReviewService::new(ctx.store.clone(), ctx.store.clone(), ctx.store.clone());
    let calls = service.select(filter).await?;
    print_calls(&calls);
    Ok(true)
}

/// `callbook history CALL`
pub async fn history(ctx: &AppContext, name: &str) -> Result<bool> {
    let service = ReviewService::new(ctx.store.clone(), ctx.store.clone(), ctx.store.clone());
    let history = service.call_history(name).await?;

    println!("{}", history.name);
    if history.uses.is_empty() {
        println!("This call has never been used");
        return Ok(true);
    }
    println!("Uses:");
    for used_at in &history.uses {
        println!("  {}", used_at.format("%a %b %d %Y"));
    }
    Ok(true)
}
