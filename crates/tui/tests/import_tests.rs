//! JSON import into the new-tenant tab.

mod helpers;

use helpers::*;
use zayavki_tui::forms::TabId;
use zayavki_tui::{App, Popup, ToastLevel};

const TICKET: &str = r#"{
    "number": "SRT-0005678",
    "customFieldsValues": [
        {"code": "appealNumber", "value": "SD-0001234"},
        {"code": "applicant", "value": "Иванов Иван"},
        {"code": "resources", "value": "Бакеты:\nif-cosd-data 100 ГБ\nПользователи:\n- if_cosd_app\n"}
    ]
}"#;

const PARAMS: &str = r#"[
    {"label": "Зона безопасности", "value": "B2B-CLOUD"},
    {"label": "Среда", "value": "IFT"},
    {"label": "РИС номер", "value": "1234"},
    {"label": "РИС имя", "value": "cosd"},
    {"label": "Владелец", "value": "owner@vtb.ru"}
]"#;

#[test]
fn test_import_fills_new_tenant_tab() {
    let mut app = App::default();
    app.switch_tab(TabId::NewTenant);

    app.apply_import(TICKET, PARAMS);

    assert_eq!(app.field_value("request_id_srt").as_deref(), Some("SRT-0005678"));
    assert_eq!(app.field_value("request_id_sd").as_deref(), Some("SD-0001234"));
    assert_eq!(app.field_value("segment").as_deref(), Some("B2B-CLOUD"));
    assert_eq!(app.field_value("env").as_deref(), Some("IFT"));
    assert_eq!(app.field_value("owner").as_deref(), Some("owner@vtb.ru"));
    assert_eq!(app.field_value("buckets").as_deref(), Some("if-cosd-data | 100"));
    assert_eq!(app.field_value("users").as_deref(), Some("if_cosd_app"));
    let toast = app.toasts.last().expect("toast shown");
    assert_eq!(toast.level, ToastLevel::Success);
}

#[test]
fn test_imported_values_are_validated() {
    let mut app = App::default();
    app.switch_tab(TabId::NewTenant);

    app.apply_import(TICKET, PARAMS);

    assert!(app.validation.get("buckets").is_some_and(|m| !m.is_error()));
    assert!(app.validation.get("owner").is_none());
}

#[test]
fn test_bad_json_leaves_form_untouched() {
    let mut app = App::default();
    app.switch_tab(TabId::NewTenant);
    fill(&mut app, &[("ris_name", "cosd")]);

    app.apply_import("{not json", "");

    assert_eq!(app.field_value("ris_name").as_deref(), Some("cosd"));
    assert_eq!(app.field_value("request_id_srt").as_deref(), Some(""));
    let toast = app.toasts.last().expect("toast shown");
    assert_eq!(toast.level, ToastLevel::Error);
    assert!(toast.message.starts_with("Ошибка парсинга JSON: "));
}

#[test]
fn test_import_dialog_submits_pasted_text() {
    let mut app = App::default();
    app.switch_tab(TabId::NewTenant);
    app.handle_input(ctrl_key('o'));
    assert!(matches!(app.popup, Some(Popup::JsonImport(_))));

    type_text(&mut app, "[1");
    app.handle_input(ctrl_key('s'));

    assert!(app.popup.is_none());
    let toast = app.toasts.last().expect("toast shown");
    assert_eq!(toast.level, ToastLevel::Error);
}
