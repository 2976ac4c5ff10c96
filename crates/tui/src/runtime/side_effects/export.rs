//! Export-related side effect handlers.
//!
//! Responsibilities:
//! - Write the search table to a CSV file.
//!
//! Does NOT handle:
//! - Direct state modification (sends actions for that).
//! - UI rendering.

use std::path::PathBuf;

use super::SideEffectContext;
use crate::action::Action;
use crate::ui::ToastLevel;

/// Handle exporting the search table to `path`.
pub async fn handle_export_search(
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    path: PathBuf,
    context: SideEffectContext,
) {
    let notification = match crate::export::export_table(&header, &rows, &path).await {
        Ok(()) => Action::Notify(
            ToastLevel::Success,
            format!("Exported to {}", path.display()),
        ),
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "export failed");
            Action::Notify(ToastLevel::Error, format!("Export failed: {e}"))
        }
    };
    context.send(notification).await;
}
