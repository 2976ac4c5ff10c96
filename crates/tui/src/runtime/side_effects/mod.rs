//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run backend requests triggered by tab buttons.
//! - Drive the submission workflow, including the cluster choice.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every request runs in a task spawned on the shared `TaskTracker`.
//! - Every request ends with exactly one `Action::OperationFinished`.
//! - Error text is prefixed once here and shown as is by the result area.

mod dispatcher;
mod export;
mod search;
mod submit;
mod tenant;
mod types;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;
pub use types::{SharedClient, SideEffectContext};

use zayavki_client::ClientError;

/// Prefix for failed searches and form submissions.
pub(crate) fn request_error(error: &ClientError) -> String {
    format!("An error occurred: {}", error.user_message())
}

/// Prefix for failed tenant checks, deactivations and quota updates.
pub(crate) fn tenant_error(error: &ClientError) -> String {
    format!("Ошибка: {}", error.user_message())
}
