//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: busy marker, session context, layout constants
//! - `form`: live inputs of the active tab
//! - `clipboard`: clipboard integration
//! - `popups`: cluster picker and JSON import dialog
//! - `input`: key handling and input widgets
//! - `requests`: turning a button press into a backend request
//! - `actions`: applying actions to the state
//! - `render`: rendering logic

pub mod clipboard;
pub mod form;
pub mod input;
pub mod popups;
pub mod state;

mod actions;
mod render;
mod requests;

pub use popups::{ClusterPicker, ImportFocus, JsonImportPopup, Popup};
pub use state::{FOOTER_HEIGHT, HEADER_HEIGHT, OperationKind, PendingOperation, Session};

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use ratatui::layout::Rect;
use tracing::{debug, info, warn};
use zayavki_client::FormData;
use zayavki_config::constants::SEARCH_EXPORT_FILE_NAME;

use crate::app::form::TabForm;
use crate::forms::import::{ImportError, ImportSchema};
use crate::forms::validation::{ValidationMessage, validate_field, validate_tab};
use crate::forms::{ClearScope, FieldStore, TabId, tab_config};
use crate::results::ResultView;
use crate::ui::Toast;
use crate::ui::theme::Theme;

pub(crate) const BUSY_MESSAGE: &str = "Дождитесь завершения текущей операции";
const IMPORT_OK: &str = "JSON данные успешно импортированы";

/// Connection details shown in the header.
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    pub base_url: String,
    /// Directory the search export is written to.
    pub export_dir: PathBuf,
}

impl Default for ConnectionContext {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            export_dir: PathBuf::from("."),
        }
    }
}

/// Main application state.
pub struct App {
    pub active_tab: TabId,
    /// Inputs of the active tab.
    pub form: TabForm,
    /// Values remembered for inactive tabs.
    pub store: FieldStore,
    /// Messages under the fields of the active tab.
    pub validation: BTreeMap<&'static str, ValidationMessage>,

    /// Shared result area; replaced on every operation.
    pub results: ResultView,
    pub result_scroll: u16,

    pub session: Session,
    pub pending: Option<PendingOperation>,
    pub popup: Option<Popup>,
    pub toasts: Vec<Toast>,

    /// Index into fields followed by buttons of the active tab.
    pub focus: usize,
    /// When the command block was last copied.
    pub copied_at: Option<Instant>,
    pub spinner_frame: u8,

    pub connection: ConnectionContext,
    pub theme: Theme,
    pub last_area: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ConnectionContext::default())
    }
}

impl App {
    pub fn new(connection: ConnectionContext) -> Self {
        let active_tab = TabId::Search;
        Self {
            active_tab,
            form: TabForm::new(active_tab),
            store: FieldStore::new(),
            validation: BTreeMap::new(),
            results: ResultView::default(),
            result_scroll: 0,
            session: Session::default(),
            pending: None,
            popup: None,
            toasts: Vec::new(),
            focus: 0,
            copied_at: None,
            spinner_frame: 0,
            connection,
            theme: Theme::default(),
            last_area: Rect::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Values of the active tab's inputs.
    pub fn form_data(&self) -> FormData {
        self.form.data()
    }

    pub fn field_value(&self, id: &str) -> Option<String> {
        self.form.value(id)
    }

    /// Set a field of the active tab and re-run its validator.
    ///
    /// Returns `false` when the active tab has no such field.
    pub fn set_field_value(&mut self, id: &str, value: &str) -> bool {
        if !self.form.set_value(id, value) {
            return false;
        }
        self.revalidate_field(id);
        true
    }

    /// Save the active tab, then show `tab` with its remembered values.
    ///
    /// Refused while an operation is pending.
    pub fn switch_tab(&mut self, tab: TabId) -> bool {
        if self.is_busy() {
            self.toasts.push(Toast::warning(BUSY_MESSAGE));
            return false;
        }
        if tab == self.active_tab {
            return true;
        }

        let current = self.form.data();
        self.store.save(self.active_tab, current.iter());
        debug!(from = %self.active_tab, to = %tab, "switching tab");

        self.active_tab = tab;
        self.form = TabForm::restored(tab, &self.store);
        self.focus = 0;
        self.revalidate();
        true
    }

    /// Blank inputs and remembered values in `scope`, and the result area.
    pub fn clear(&mut self, scope: ClearScope) -> bool {
        if self.is_busy() {
            self.toasts.push(Toast::warning(BUSY_MESSAGE));
            return false;
        }
        self.form.clear();
        self.store.clear(scope);
        self.validation.clear();
        self.results = ResultView::default();
        self.result_scroll = 0;
        self.copied_at = None;
        info!(?scope, "fields cleared");
        true
    }

    /// Re-run every validator of the active tab.
    pub fn revalidate(&mut self) {
        self.validation = validate_tab(self.active_tab, &self.form.data());
    }

    /// Re-run the validator of one field.
    ///
    /// Naming checks depend on other fields, so editing `env`, `ris_name` or
    /// `tenant` re-checks the whole tab.
    pub fn revalidate_field(&mut self, id: &str) {
        if matches!(id, "env" | "ris_name" | "tenant") {
            self.revalidate();
            return;
        }
        let data = self.form.data();
        match validate_field(self.active_tab, id, &data) {
            Some(message) => {
                if let Some(spec) = tab_config(self.active_tab).field(id) {
                    self.validation.insert(spec.id, message);
                }
            }
            None => {
                self.validation.remove(id);
            }
        }
    }

    /// Where the search export is written.
    pub fn export_path(&self) -> PathBuf {
        self.connection.export_dir.join(SEARCH_EXPORT_FILE_NAME)
    }

    /// Fill the new-tenant tab from the pasted ticket and parameter documents.
    pub fn apply_import(&mut self, ticket_json: &str, params_json: &str) {
        let imported = ImportSchema::new()
            .map_err(ImportError::from)
            .and_then(|schema| schema.import(ticket_json, params_json));

        let fields = match imported {
            Ok(fields) => fields,
            Err(e) => {
                warn!(error = %e, "json import failed");
                self.toasts.push(Toast::error(format!("Ошибка парсинга JSON: {e}")));
                return;
            }
        };

        if !self.switch_tab(TabId::NewTenant) {
            return;
        }
        for (id, value) in fields.iter() {
            self.form.set_value(id, value);
        }
        self.revalidate();
        info!(fields = fields.len(), "json import applied");
        self.toasts.push(Toast::success(IMPORT_OK));
    }
}
