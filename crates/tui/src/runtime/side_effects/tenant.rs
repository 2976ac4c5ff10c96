//! Existing-tenant side effect handlers.
//!
//! Responsibilities:
//! - Check a tenant (info, then resources) before adding to it.
//! - Commit additions with the checked tenant's info merged in.
//! - Check, deactivate and re-quota users and buckets.
//!
//! Does NOT handle:
//! - Direct state modification (sends actions for that).
//! - Deciding whether a commit is allowed (see `App::press`).

use tracing::{info, warn};
use zayavki_client::{
    ClientError, DeactivationRequest, FormData, ProvisioningOutcome, QuotaUpdateRequest,
    Submission, SubmitFlags, TenantInfo, TenantResourcesRequest, WorkflowOutcome,
};

use super::{SideEffectContext, TaskTracker, request_error, tenant_error};
use crate::action::{Action, OperationOutput};

fn finish(result: Result<ProvisioningOutcome, ClientError>, operation: &'static str) -> Action {
    let output = match result {
        Ok(outcome) => OperationOutput::completed(outcome),
        Err(e) => {
            warn!(error = %e, operation, "tenant operation failed");
            OperationOutput::Failed(tenant_error(&e))
        }
    };
    Action::OperationFinished(output)
}

/// Fetch tenant info, then check the listed resources for creation.
pub fn handle_check_tenant(
    request: TenantResourcesRequest,
    context: SideEffectContext,
    tracker: TaskTracker,
) {
    tracker.spawn(async move {
        let result = async {
            let info = context.client.tenant_info(&request.tenant).await?;
            let resources = context.client.check_tenant_resources(&request).await?;
            Ok::<_, ClientError>(ProvisioningOutcome::TenantCheck { info, resources })
        }
        .await;
        context.send(finish(result, "check_tenant")).await;
    });
}

/// Submit additions to a checked tenant.
///
/// Segment, environment, RIS fields, cluster and tenant name come from the
/// tenant info, not from the form.
pub fn handle_commit_tenant_changes(
    mut form: FormData,
    info: TenantInfo,
    context: SideEffectContext,
    tracker: TaskTracker,
) {
    tracker.spawn(async move {
        form.merge_tenant_info(&info);
        info!(tenant = %info.tenant, "committing tenant changes");

        let mut submission = Submission::new(&context.client, &context.chooser);
        let output = match submission.submit(&form, SubmitFlags::commit()).await {
            Ok(WorkflowOutcome::Completed {
                outcome: ProvisioningOutcome::Text(text),
                selected_cluster,
            }) => OperationOutput::Completed {
                outcome: ProvisioningOutcome::TenantSubmission { info, text },
                selected_cluster,
            },
            Ok(other) => OperationOutput::from(other),
            Err(e) => {
                warn!(error = %e, "tenant commit failed");
                OperationOutput::Failed(request_error(&e))
            }
        };
        drop(submission);
        context.send(Action::OperationFinished(output)).await;
    });
}

/// Check resources of an existing tenant for deletion or quota changes.
pub fn handle_check_resources(
    request: TenantResourcesRequest,
    context: SideEffectContext,
    tracker: TaskTracker,
) {
    tracker.spawn(async move {
        let result = context
            .client
            .check_tenant_resources(&request)
            .await
            .map(ProvisioningOutcome::TenantResources);
        context.send(finish(result, "check_resources")).await;
    });
}

pub fn handle_deactivate(
    request: DeactivationRequest,
    context: SideEffectContext,
    tracker: TaskTracker,
) {
    tracker.spawn(async move {
        let result = context
            .client
            .deactivate_resources(&request)
            .await
            .map(ProvisioningOutcome::Deactivation);
        context.send(finish(result, "deactivate")).await;
    });
}

pub fn handle_update_quotas(
    request: QuotaUpdateRequest,
    context: SideEffectContext,
    tracker: TaskTracker,
) {
    tracker.spawn(async move {
        let result = context
            .client
            .update_bucket_quotas(&request)
            .await
            .map(ProvisioningOutcome::QuotaUpdate);
        context.send(finish(result, "update_quotas")).await;
    });
}
