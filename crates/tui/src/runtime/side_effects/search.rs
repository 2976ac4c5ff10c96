//! Search side effect handler.
//!
//! Responsibilities:
//! - Run a register search through the submission workflow.
//! - After a cluster was chosen, load that cluster's detail.
//!
//! Does NOT handle:
//! - Direct state modification (sends actions for that).

use tracing::{info, warn};
use zayavki_client::{ClusterInfoRequest, SearchCriteria, Submission, WorkflowOutcome};

use super::{SideEffectContext, TaskTracker, request_error};
use crate::action::{Action, OperationOutput};

/// Handle a search, resolving a cluster choice if the backend asks for one.
pub fn handle_search(criteria: SearchCriteria, context: SideEffectContext, tracker: TaskTracker) {
    tracker.spawn(async move {
        let mut submission = Submission::new(&context.client, &context.chooser);
        let outcome = submission.search(&criteria).await;
        drop(submission);

        let chosen = match outcome {
            Ok(outcome) => {
                let chosen = match &outcome {
                    WorkflowOutcome::Completed {
                        selected_cluster: Some(cluster),
                        ..
                    } => Some(cluster.clone()),
                    _ => None,
                };
                context
                    .send(Action::OperationFinished(OperationOutput::from(outcome)))
                    .await;
                chosen
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                context
                    .send(Action::OperationFinished(OperationOutput::Failed(
                        request_error(&e),
                    )))
                    .await;
                None
            }
        };

        let Some(cluster) = chosen else {
            return;
        };
        info!(cluster = %cluster.name, "loading cluster details");
        let request = ClusterInfoRequest {
            segment: criteria.segment.clone(),
            env: criteria.env.clone(),
            cluster: cluster.name.clone(),
        };
        let details = context
            .client
            .cluster_info(&request)
            .await
            .map_err(|e| e.user_message());
        context.send(Action::ClusterDetailsLoaded(details)).await;
    });
}
