//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: Application lifecycle, key input, resize, ticks
//! - **Requests**: Backend operations, handled by `runtime::side_effects`
//! - **Results**: Outcomes sent back by spawned tasks
//! - **Notifications**: Toasts and clipboard feedback
//!
//! Request variants are consumed by the side-effect dispatcher; everything
//! else is applied to `App` through `App::update`. `Action` is deliberately
//! not `Clone`: a cluster choice carries the one-shot responder of a
//! suspended submission.

use std::path::PathBuf;

use crossterm::event::{KeyEvent, MouseEvent};
use zayavki_client::{
    Cluster, ClusterChoiceRequest, DeactivationRequest, FormData, ProvisioningOutcome,
    QuotaUpdateRequest, SearchCriteria, SubmitFlags, TenantInfo, TenantResourcesRequest,
    WorkflowOutcome,
};

use crate::ui::ToastLevel;

/// Result of one backend operation as delivered to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    Completed {
        outcome: ProvisioningOutcome,
        selected_cluster: Option<Cluster>,
    },
    /// The user cancelled the cluster picker; nothing is shown.
    Abandoned,
    /// Error text, already prefixed for the result area.
    Failed(String),
}

impl OperationOutput {
    pub fn completed(outcome: ProvisioningOutcome) -> Self {
        Self::Completed {
            outcome,
            selected_cluster: None,
        }
    }
}

impl From<WorkflowOutcome> for OperationOutput {
    fn from(outcome: WorkflowOutcome) -> Self {
        match outcome {
            WorkflowOutcome::Completed {
                outcome,
                selected_cluster,
            } => Self::Completed {
                outcome,
                selected_cluster,
            },
            WorkflowOutcome::Abandoned => Self::Abandoned,
        }
    }
}

/// Unified action type for the TUI event loop.
#[derive(Debug)]
pub enum Action {
    // System
    Quit,
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,

    // Requests
    /// Search the register, resolving a cluster choice if asked.
    Search(SearchCriteria),
    /// Post a form through the submission workflow.
    SubmitForm { form: FormData, flags: SubmitFlags },
    /// Fetch tenant info, then check its resources for creation.
    CheckTenant(TenantResourcesRequest),
    /// Commit a checked tenant's changes with its info merged in.
    CommitTenantChanges { form: FormData, info: TenantInfo },
    /// Check resources without fetching tenant info first.
    CheckResources(TenantResourcesRequest),
    Deactivate(DeactivationRequest),
    UpdateQuotas(QuotaUpdateRequest),
    /// Write the search table as CSV.
    ExportSearch {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        path: PathBuf,
    },

    // Results
    OperationFinished(OperationOutput),
    ClusterDetailsLoaded(Result<Cluster, String>),
    /// A submission is suspended until the user picks a cluster.
    ClusterChoiceRequested(ClusterChoiceRequest),

    // Notifications
    CopyToClipboard(String),
    Notify(ToastLevel, String),
}

impl Action {
    /// Whether this action is handled by the side-effect dispatcher.
    pub fn is_side_effect(&self) -> bool {
        matches!(
            self,
            Action::Search(_)
                | Action::SubmitForm { .. }
                | Action::CheckTenant(_)
                | Action::CommitTenantChanges { .. }
                | Action::CheckResources(_)
                | Action::Deactivate(_)
                | Action::UpdateQuotas(_)
                | Action::ExportSearch { .. }
        )
    }

    /// Variant name, safe for span fields.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Input(_) => "Input",
            Action::Mouse(_) => "Mouse",
            Action::Resize(_, _) => "Resize",
            Action::Tick => "Tick",
            Action::Search(_) => "Search",
            Action::SubmitForm { .. } => "SubmitForm",
            Action::CheckTenant(_) => "CheckTenant",
            Action::CommitTenantChanges { .. } => "CommitTenantChanges",
            Action::CheckResources(_) => "CheckResources",
            Action::Deactivate(_) => "Deactivate",
            Action::UpdateQuotas(_) => "UpdateQuotas",
            Action::ExportSearch { .. } => "ExportSearch",
            Action::OperationFinished(_) => "OperationFinished",
            Action::ClusterDetailsLoaded(_) => "ClusterDetailsLoaded",
            Action::ClusterChoiceRequested(_) => "ClusterChoiceRequested",
            Action::CopyToClipboard(_) => "CopyToClipboard",
            Action::Notify(_, _) => "Notify",
        }
    }
}
