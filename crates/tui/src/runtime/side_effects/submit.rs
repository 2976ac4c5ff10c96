//! Form submission side effect handler.

use tracing::warn;
use zayavki_client::{FormData, Submission, SubmitFlags};

use super::{SideEffectContext, TaskTracker, request_error};
use crate::action::{Action, OperationOutput};

/// Post a form, suspending on the cluster picker when the backend asks.
pub fn handle_submit_form(
    form: FormData,
    flags: SubmitFlags,
    context: SideEffectContext,
    tracker: TaskTracker,
) {
    tracker.spawn(async move {
        let mut submission = Submission::new(&context.client, &context.chooser);
        let output = match submission.submit(&form, flags).await {
            Ok(outcome) => OperationOutput::from(outcome),
            Err(e) => {
                warn!(error = %e, push_to_db = flags.push_to_db, "submission failed");
                OperationOutput::Failed(request_error(&e))
            }
        };
        drop(submission);
        context.send(Action::OperationFinished(output)).await;
    });
}
