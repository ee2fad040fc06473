use anyhow::Result;

use callbook_application::{CollectionEditorService, PopulateSource};
use callbook_core::collection::CollectionKind;
use callbook_core::editor::EditorOptions;

use super::{AppContext, print_alert, print_calls};

/// What `callbook build` was asked to do, in application order:
/// populate sources first, then additions, then removals.
pub struct BuildPlan {
    pub kind: CollectionKind,
    pub name: String,
    pub from_sessions: Vec<String>,
    pub from_templates: Vec<String>,
    pub from_history: bool,
    pub add: Vec<String>,
    pub remove: Vec<String>,
}

impl BuildPlan {
    fn sources(&self) -> Vec<PopulateSource> {
        let mut sources: Vec<PopulateSource> = self
            .from_sessions
            .iter()
            .cloned()
            .map(PopulateSource::Session)
            .collect();
        sources.extend(self.from_templates.iter().cloned().map(PopulateSource::Template));
        if self.from_history {
            sources.push(PopulateSource::HistoryUsed);
        }
        sources
    }
}

pub async fn execute(ctx: &AppContext, plan: BuildPlan) -> Result<bool> {
    let options = EditorOptions::for_kind(plan.kind).with_default_sort(ctx.config.sort_key());
    let mut service =
        CollectionEditorService::open(ctx.store.clone(), ctx.store.clone(), options).await?;

    for source in plan.sources() {
        let moved = service.populate_from(&source).await?;
        tracing::debug!("[build] {:?} moved {} calls", source, moved);
    }
    let add_label = service.editor().options().move_target_label.clone();
    for name in &plan.add {
        if service.move_call(name, true) {
            println!("{}: {}", add_label, name);
        } else if service.editor().state().is_selected(name) {
            tracing::warn!("[build] '{}' is already selected", name);
        } else {
            tracing::warn!("[build] '{}' is not in the catalog", name);
        }
    }
    for name in &plan.remove {
        if !service.move_call(name, false) {
            tracing::warn!("[build] '{}' is not in the selection", name);
        }
    }

    let selection = service.editor().selection_view();
    let saved = service.save(plan.kind, &plan.name).await?;
    if saved {
        println!("{} '{}':", plan.kind.title(), plan.name.trim());
        print_calls(&selection);
    }
    print_alert(service.editor().alert());
    Ok(saved)
}
