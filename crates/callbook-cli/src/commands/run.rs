use anyhow::Result;

use callbook_application::SessionRunnerService;

use super::{AppContext, print_alert};

/// `callbook run SESSION --used CALL...`
///
/// Loads the session, toggles each `--used` call in order and finishes the
/// run, writing the session back and appending history.
pub async fn execute(ctx: &AppContext, session: &str, used: &[String]) -> Result<bool> {
    let mut service = SessionRunnerService::new(ctx.store.clone(), ctx.store.clone());

    if !service.load(session).await? {
        print_alert(service.runner().alert());
        return Ok(false);
    }

    for name in used {
        if service.toggle(name).is_none() {
            tracing::warn!("[run] '{}' is not part of session '{}'", name, session);
        }
    }

    let finished = service.finish().await?;
    print_alert(service.runner().alert());
    Ok(finished)
}
