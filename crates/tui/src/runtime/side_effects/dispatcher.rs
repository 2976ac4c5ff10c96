//! Side effect dispatcher.
//!
//! Routes request actions to their handler functions in submodules.

use std::time::Instant;

use tracing::{Instrument, debug, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{SideEffectContext, TaskTracker, export, search, submit, tenant};

/// Handle side effects (async backend calls) for actions.
///
/// Request actions spawn a task on `task_tracker` and report back through
/// the context's action channel. Other actions are ignored.
pub async fn handle_side_effects(
    action: Action,
    context: SideEffectContext,
    task_tracker: TaskTracker,
) {
    let action_name = action.name();
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, context, task_tracker).await;

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

async fn handle_action(action: Action, context: SideEffectContext, task_tracker: TaskTracker) {
    match action {
        Action::Search(criteria) => search::handle_search(criteria, context, task_tracker),
        Action::SubmitForm { form, flags } => {
            submit::handle_submit_form(form, flags, context, task_tracker)
        }
        Action::CheckTenant(request) => {
            tenant::handle_check_tenant(request, context, task_tracker)
        }
        Action::CommitTenantChanges { form, info } => {
            tenant::handle_commit_tenant_changes(form, info, context, task_tracker)
        }
        Action::CheckResources(request) => {
            tenant::handle_check_resources(request, context, task_tracker)
        }
        Action::Deactivate(request) => tenant::handle_deactivate(request, context, task_tracker),
        Action::UpdateQuotas(request) => {
            tenant::handle_update_quotas(request, context, task_tracker)
        }
        Action::ExportSearch { header, rows, path } => {
            export::handle_export_search(header, rows, path, context).await
        }
        other => debug!(action = other.name(), "not a side effect"),
    }
}
