//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so that form values, tenant names and
//! backend replies never reach the log file. Only variant names, field counts
//! and payload sizes are printed.
//!
//! # Invariants
//!
//! - Every variant carrying user-entered or backend-provided text is handled
//!   explicitly.
//! - Simple variants fall through to default Debug.
//!
//! # Example
//!
//! ```ignore
//! let action = Action::CopyToClipboard("s3 user create if_cosd_app".to_string());
//! tracing::info!("Handling action: {:?}", RedactedAction(&action));
//! // Logs: Handling action: CopyToClipboard(<26 chars>)
//! ```

use zayavki_client::ProvisioningOutcome;

use crate::action::variants::{Action, OperationOutput};

/// Redacted wrapper for Action that prevents sensitive payloads from being logged.
pub struct RedactedAction<'a>(pub &'a Action);

fn outcome_kind(outcome: &ProvisioningOutcome) -> String {
    match outcome {
        ProvisioningOutcome::Text(text) => format!("Text(<{} chars>)", text.len()),
        ProvisioningOutcome::Search(rows) => format!("Search(<{} rows>)", rows.len()),
        ProvisioningOutcome::ClusterDetails(_) => "ClusterDetails".to_string(),
        ProvisioningOutcome::TenantResources(r) => format!(
            "TenantResources(<{} users, {} buckets>)",
            r.users.len(),
            r.buckets.len()
        ),
        ProvisioningOutcome::TenantCheck { resources, .. } => format!(
            "TenantCheck(<{} users, {} buckets>)",
            resources.users.len(),
            resources.buckets.len()
        ),
        ProvisioningOutcome::TenantSubmission { text, .. } => {
            format!("TenantSubmission(<{} chars>)", text.len())
        }
        ProvisioningOutcome::Deactivation(d) => format!(
            "Deactivation(<{} users, {} buckets, {} errors>)",
            d.deactivated_users.len(),
            d.deactivated_buckets.len(),
            d.errors.len()
        ),
        ProvisioningOutcome::QuotaUpdate(q) => format!(
            "QuotaUpdate(<{} buckets, {} errors>)",
            q.updated_buckets.len(),
            q.errors.len()
        ),
    }
}

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Search(_) => write!(f, "Search(<criteria>)"),
            Action::SubmitForm { form, flags } => write!(
                f,
                "SubmitForm(<{} fields>, push_to_db={}, create_tenant={})",
                form.len(),
                flags.push_to_db,
                flags.create_tenant
            ),
            Action::CheckTenant(req) | Action::CheckResources(req) => write!(
                f,
                "{}(<{} users, {} buckets>, mode={:?})",
                self.0.name(),
                req.users.len(),
                req.buckets.len(),
                req.mode
            ),
            Action::CommitTenantChanges { form, .. } => {
                write!(f, "CommitTenantChanges(<{} fields>)", form.len())
            }
            Action::Deactivate(req) => write!(
                f,
                "Deactivate(<{} users, {} buckets>)",
                req.users.len(),
                req.buckets.len()
            ),
            Action::UpdateQuotas(req) => {
                write!(f, "UpdateQuotas(<{} buckets>)", req.buckets.len())
            }
            Action::ExportSearch { rows, path, .. } => {
                write!(f, "ExportSearch(<{} rows>, {:?})", rows.len(), path)
            }
            Action::OperationFinished(output) => match output {
                OperationOutput::Completed {
                    outcome,
                    selected_cluster,
                } => write!(
                    f,
                    "OperationFinished({}, cluster_selected={})",
                    outcome_kind(outcome),
                    selected_cluster.is_some()
                ),
                OperationOutput::Abandoned => write!(f, "OperationFinished(Abandoned)"),
                OperationOutput::Failed(_) => write!(f, "OperationFinished(<error>)"),
            },
            Action::ClusterDetailsLoaded(result) => match result {
                Ok(_) => write!(f, "ClusterDetailsLoaded(<data>)"),
                Err(_) => write!(f, "ClusterDetailsLoaded(<error>)"),
            },
            Action::ClusterChoiceRequested(req) => write!(
                f,
                "ClusterChoiceRequested(<{} clusters>)",
                req.clusters.len()
            ),
            Action::CopyToClipboard(text) => {
                write!(f, "CopyToClipboard(<{} chars>)", text.len())
            }
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }

            // Non-sensitive simple actions
            other => write!(f, "{:?}", other),
        }
    }
}
