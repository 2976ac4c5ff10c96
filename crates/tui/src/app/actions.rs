//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply operation results to the result area and the session.
//! - Open the cluster picker for a suspended submission.
//! - Clipboard copies, toasts and tick housekeeping.
//!
//! Non-responsibilities:
//! - Does NOT create request actions (see `requests` and `input`).
//! - Does NOT perform async operations.

use std::time::Instant;

use tracing::{debug, error, info, warn};
use zayavki_client::ProvisioningOutcome;
use zayavki_config::constants::DEFAULT_CLIPBOARD_PREVIEW_CHARS;

use crate::action::{Action, OperationOutput};
use crate::app::state::{COPIED_LABEL_TTL, OperationKind};
use crate::app::{App, clipboard};
use crate::results::ResultView;
use crate::ui::Toast;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => self.handle_tick(),
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
            }
            Action::OperationFinished(output) => self.finish_operation(output),
            Action::ClusterDetailsLoaded(Ok(cluster)) => {
                self.results.push_cluster_details(&cluster);
            }
            Action::ClusterDetailsLoaded(Err(message)) => {
                warn!(%message, "cluster details unavailable");
                self.toasts.push(Toast::warning(format!(
                    "Не удалось получить информацию о кластере: {message}"
                )));
            }
            Action::ClusterChoiceRequested(request) => self.open_cluster_picker(request),
            Action::CopyToClipboard(content) => self.handle_copy_to_clipboard(content),
            Action::Notify(level, message) => self.toasts.push(Toast::new(message, level)),
            Action::Mouse(mouse) => self.handle_mouse(mouse),
            Action::Quit | Action::Input(_) => {}
            other => debug!(action = other.name(), "request action ignored by App::update"),
        }
    }

    fn handle_tick(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
        if self.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if self
            .copied_at
            .is_some_and(|at| at.elapsed() >= COPIED_LABEL_TTL)
        {
            self.copied_at = None;
        }
    }

    fn finish_operation(&mut self, output: OperationOutput) {
        let Some(pending) = self.pending.take() else {
            warn!("operation finished with nothing pending");
            return;
        };
        self.result_scroll = 0;
        self.copied_at = None;

        match output {
            OperationOutput::Completed {
                outcome,
                selected_cluster,
            } => {
                info!(tab = %pending.tab, kind = ?pending.kind, "operation completed");
                if let Some(cluster) = selected_cluster {
                    self.session.selected_cluster = Some(cluster);
                }
                if let ProvisioningOutcome::TenantCheck { info, .. } = &outcome {
                    self.session.last_checked_tenant = Some(info.clone());
                }
                self.results = ResultView::from_outcome(pending.tab, &outcome);
            }
            OperationOutput::Abandoned => {
                info!(tab = %pending.tab, "operation abandoned at cluster choice");
                if pending.kind == OperationKind::Commit {
                    self.results = ResultView::default();
                }
            }
            OperationOutput::Failed(message) => {
                error!(tab = %pending.tab, kind = ?pending.kind, "operation failed");
                self.results = ResultView::failure(message);
            }
        }
    }

    fn handle_copy_to_clipboard(&mut self, content: String) {
        match clipboard::copy_to_clipboard(content.clone()) {
            Ok(()) => {
                let preview = Self::clipboard_preview(&content);
                self.toasts.push(Toast::info(format!("Copied: {preview}")));
                self.copied_at = Some(Instant::now());
            }
            Err(e) => {
                self.toasts.push(Toast::error(format!("Clipboard error: {e}")));
            }
        }
    }

    /// One-line, length-limited preview of copied text.
    pub(crate) fn clipboard_preview(content: &str) -> String {
        let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= DEFAULT_CLIPBOARD_PREVIEW_CHARS {
            return flat;
        }
        let head: String = flat.chars().take(DEFAULT_CLIPBOARD_PREVIEW_CHARS).collect();
        format!("{head}...")
    }

    /// Whether the copy button should read "Скопировано!".
    pub fn copy_feedback_active(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_LABEL_TTL)
    }
}
