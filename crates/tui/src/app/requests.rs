//! Turning a tab button into a backend request.
//!
//! Responsibilities:
//! - Gate every request on required fields and validator errors.
//! - Build the request action for the active tab and operation.
//! - Mark the app busy until the operation reports back.
//!
//! Does NOT handle:
//! - Sending anything (see `runtime::side_effects`).
//!
//! Invariants:
//! - A blocked request leaves `pending` untouched and returns no action.
//! - At most one operation is pending at a time.

use tracing::{info, warn};
use zayavki_client::form::{bucket_names, bucket_quotas};
use zayavki_client::{
    DeactivationRequest, FormData, QuotaUpdateRequest, ResourceMode, SearchCriteria, SubmitFlags,
    TenantResourcesRequest,
};

use crate::action::Action;
use crate::app::popups::{JsonImportPopup, Popup};
use crate::app::state::{OperationKind, PendingOperation};
use crate::app::{App, BUSY_MESSAGE};
use crate::forms::registry::ButtonBehavior;
use crate::forms::validation::{missing_required, validate_tab};
use crate::forms::{ClearScope, TabId, tab_config};
use crate::results::ResultView;
use crate::ui::Toast;

const COMMIT_IN_PROGRESS: &str = "Pushing data to DB...";
const TENANT_NOT_CHECKED: &str = "Ошибка: Сначала выполните проверку тенанта";
const TENANT_REQUIRED: &str = "Ошибка: Необходимо указать имя тенанта";
const NOTHING_TO_DEACTIVATE: &str =
    "Ошибка: Необходимо указать пользователей или бакеты для деактивации";

impl App {
    /// Press a button of the active tab.
    ///
    /// Buttons the active tab does not have are ignored.
    pub fn press(&mut self, behavior: ButtonBehavior) -> Option<Action> {
        if !tab_config(self.active_tab).has_button(behavior) {
            return None;
        }
        match behavior {
            ButtonBehavior::Search => self.start_request(OperationKind::Search),
            ButtonBehavior::Check => self.start_request(OperationKind::Check),
            ButtonBehavior::Commit => self.start_request(OperationKind::Commit),
            ButtonBehavior::Clear => {
                self.clear(ClearScope::Tab(self.active_tab));
                None
            }
            ButtonBehavior::ClearAll => {
                self.clear(ClearScope::All);
                None
            }
            ButtonBehavior::ImportJson => {
                if self.is_busy() {
                    self.toasts.push(Toast::warning(BUSY_MESSAGE));
                } else {
                    self.popup = Some(Popup::JsonImport(JsonImportPopup::new()));
                }
                None
            }
        }
    }

    fn start_request(&mut self, kind: OperationKind) -> Option<Action> {
        if self.is_busy() {
            self.toasts.push(Toast::warning(BUSY_MESSAGE));
            return None;
        }
        let form = self.gated_form()?;

        let action = match self.request_action(kind, form) {
            Ok(action) => action,
            Err(message) => {
                warn!(tab = %self.active_tab, ?kind, "request refused before sending");
                self.results = ResultView::failure(message);
                return None;
            }
        };

        info!(tab = %self.active_tab, ?kind, "starting operation");
        self.pending = Some(PendingOperation::new(self.active_tab, kind));
        self.result_scroll = 0;
        if kind == OperationKind::Commit {
            self.results = ResultView::text(COMMIT_IN_PROGRESS);
        }
        Some(action)
    }

    /// Current form values, or `None` when a required field is blank or a
    /// validator reports an error.
    fn gated_form(&mut self) -> Option<FormData> {
        let tab = self.active_tab;
        let data = self.form.data();
        self.validation = validate_tab(tab, &data);

        let missing = missing_required(tab, &data);
        if !missing.is_empty() {
            self.results = ResultView::failure(format!(
                "Заполните обязательные поля: {}",
                missing.join(", ")
            ));
            return None;
        }

        let config = tab_config(tab);
        let invalid: Vec<&str> = self
            .validation
            .iter()
            .filter(|(_, message)| message.is_error())
            .filter_map(|(id, _)| config.field(id).map(|spec| spec.label))
            .collect();
        if !invalid.is_empty() {
            self.results =
                ResultView::failure(format!("Исправьте ошибки в полях: {}", invalid.join(", ")));
            return None;
        }

        Some(data)
    }

    fn request_action(&self, kind: OperationKind, form: FormData) -> Result<Action, String> {
        use OperationKind::{Check, Commit};

        let action = match (self.active_tab, kind) {
            (TabId::Search, _) | (_, OperationKind::Search) => {
                Action::Search(search_criteria(&form))
            }
            (TabId::NewTenant, Check) => Action::SubmitForm {
                form,
                flags: SubmitFlags::check().creating_tenant(),
            },
            (TabId::NewTenant, Commit) => Action::SubmitForm {
                form,
                flags: SubmitFlags::commit().creating_tenant(),
            },
            (TabId::TenantMod, Check) => {
                Action::CheckTenant(resources_request(&form, ResourceMode::Create)?)
            }
            (TabId::TenantMod, Commit) => {
                let info = self
                    .session
                    .checked_tenant(form.trimmed("tenant"))
                    .cloned()
                    .ok_or_else(|| TENANT_NOT_CHECKED.to_string())?;
                Action::CommitTenantChanges { form, info }
            }
            (TabId::UserBucketDel, Check) => {
                Action::CheckResources(resources_request(&form, ResourceMode::Delete)?)
            }
            (TabId::UserBucketDel, Commit) => {
                let request = resources_request(&form, ResourceMode::Delete)?;
                if request.users.is_empty() && request.buckets.is_empty() {
                    return Err(NOTHING_TO_DEACTIVATE.to_string());
                }
                Action::Deactivate(DeactivationRequest {
                    tenant: request.tenant,
                    users: request.users,
                    buckets: bucket_names(form.get("buckets").unwrap_or_default()),
                })
            }
            (TabId::BucketMod, Check) => {
                Action::CheckResources(resources_request(&form, ResourceMode::Quota)?)
            }
            (TabId::BucketMod, Commit) => Action::UpdateQuotas(QuotaUpdateRequest {
                tenant: tenant_of(&form)?,
                buckets: bucket_quotas(form.get("buckets").unwrap_or_default()),
            }),
        };
        Ok(action)
    }
}

/// Search criteria from the search tab; blank optional filters are omitted.
pub fn search_criteria(form: &FormData) -> SearchCriteria {
    let optional = |id: &str| {
        let value = form.trimmed(id);
        (!value.is_empty()).then(|| value.to_string())
    };
    SearchCriteria {
        segment: form.trimmed("segment").to_string(),
        env: form.trimmed("env").to_string(),
        ris_number: form.trimmed("ris_number").to_string(),
        ris_name: form.trimmed("ris_name").to_string(),
        cluster: optional("cluster"),
        tenant: optional("tenant"),
        bucket: optional("bucket"),
        user: optional("user"),
    }
}

fn tenant_of(form: &FormData) -> Result<String, String> {
    let tenant = form.trimmed("tenant");
    if tenant.is_empty() {
        return Err(TENANT_REQUIRED.to_string());
    }
    Ok(tenant.to_string())
}

/// Tenant plus the user and bucket lines listed on the form.
///
/// Bucket lines are sent as typed; the backend reads the name before `|`.
pub fn resources_request(
    form: &FormData,
    mode: ResourceMode,
) -> Result<TenantResourcesRequest, String> {
    Ok(TenantResourcesRequest {
        tenant: tenant_of(form)?,
        users: form.lines("users"),
        buckets: form.lines("buckets"),
        mode,
    })
}
