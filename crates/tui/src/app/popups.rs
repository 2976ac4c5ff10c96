//! Popup state and popup input handling.
//!
//! Responsibilities:
//! - Hold the cluster picker for a suspended submission and resolve it.
//! - Hold the two paste areas of the JSON import dialog.
//! - Route keys to the open popup.
//!
//! Does NOT handle:
//! - Rendering popups (see `ui::popup`).
//! - Applying imported values to the form (see `App::apply_import`).
//!
//! Invariants:
//! - A picker answers its responder at most once; dropping an unanswered
//!   picker drops the responder, which the workflow reads as a cancel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use tokio::sync::oneshot;
use tracing::{debug, info};
use zayavki_client::{Cluster, ClusterChoiceRequest};

use crate::action::Action;
use crate::app::App;
use crate::app::input::components::MultiLineInput;

/// Modal shown on top of the form.
pub enum Popup {
    ClusterPicker(ClusterPicker),
    JsonImport(JsonImportPopup),
}

/// List of candidate clusters with the detail of the highlighted one.
pub struct ClusterPicker {
    pub clusters: Vec<Cluster>,
    pub state: ListState,
    respond_to: Option<oneshot::Sender<Option<Cluster>>>,
}

impl ClusterPicker {
    pub fn new(request: ClusterChoiceRequest) -> Self {
        let mut state = ListState::default();
        if !request.clusters.is_empty() {
            state.select(Some(0));
        }
        Self {
            clusters: request.clusters,
            state,
            respond_to: Some(request.respond_to),
        }
    }

    pub fn selected(&self) -> Option<&Cluster> {
        self.state.selected().and_then(|i| self.clusters.get(i))
    }

    pub fn select_next(&mut self) {
        if self.clusters.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.clusters.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let prev = self.state.selected().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.state.select(Some(prev));
    }

    /// Answer the waiting submission.
    pub fn resolve(&mut self, choice: Option<Cluster>) {
        if let Some(tx) = self.respond_to.take()
            && tx.send(choice).is_err()
        {
            debug!("cluster choice arrived after the submission ended");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFocus {
    Ticket,
    Params,
}

/// Paste areas for the ticket and parameter documents.
pub struct JsonImportPopup {
    pub ticket: MultiLineInput<'static>,
    pub params: MultiLineInput<'static>,
    pub focus: ImportFocus,
}

impl JsonImportPopup {
    pub fn new() -> Self {
        Self {
            ticket: MultiLineInput::with_placeholder("JSON заявки"),
            params: MultiLineInput::with_placeholder("JSON параметров"),
            focus: ImportFocus::Ticket,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ImportFocus::Ticket => ImportFocus::Params,
            ImportFocus::Params => ImportFocus::Ticket,
        };
    }

    fn focused_mut(&mut self) -> &mut MultiLineInput<'static> {
        match self.focus {
            ImportFocus::Ticket => &mut self.ticket,
            ImportFocus::Params => &mut self.params,
        }
    }
}

impl Default for JsonImportPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Show the picker for a suspended submission.
    ///
    /// A second request while a picker is open is cancelled at once.
    pub(crate) fn open_cluster_picker(&mut self, request: ClusterChoiceRequest) {
        if let Some(Popup::ClusterPicker(_)) = self.popup {
            let mut extra = ClusterPicker::new(request);
            extra.resolve(None);
            return;
        }
        info!(candidates = request.clusters.len(), "cluster choice required");
        self.popup = Some(Popup::ClusterPicker(ClusterPicker::new(request)));
    }

    /// Handle keyboard input when a popup is active.
    pub(crate) fn handle_popup_input(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match self.popup.as_mut()? {
            Popup::ClusterPicker(picker) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    picker.select_next();
                    None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    picker.select_previous();
                    None
                }
                KeyCode::Enter => {
                    let choice = picker.selected().cloned();
                    if let Some(cluster) = &choice {
                        info!(cluster = %cluster.name, "cluster chosen");
                    }
                    picker.resolve(choice);
                    self.popup = None;
                    None
                }
                KeyCode::Esc => {
                    info!("cluster choice cancelled");
                    picker.resolve(None);
                    self.popup = None;
                    None
                }
                _ => None,
            },
            Popup::JsonImport(dialog) => match key.code {
                KeyCode::Esc => {
                    self.popup = None;
                    None
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    dialog.toggle_focus();
                    None
                }
                KeyCode::Char('s') if ctrl => {
                    let ticket = dialog.ticket.value();
                    let params = dialog.params.value();
                    self.popup = None;
                    self.apply_import(&ticket, &params);
                    None
                }
                _ => {
                    dialog.focused_mut().handle_key(key);
                    None
                }
            },
        }
    }
}
