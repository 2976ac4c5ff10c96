//! Tests for action redaction.

use std::path::PathBuf;

use zayavki_client::testing::sample_new_tenant_form;
use zayavki_client::{
    CheckResult, Cluster, ClusterChoiceRequest, DeactivationRequest, ProvisioningOutcome,
    ResourceMode, SubmitFlags, TenantResourcesRequest,
};

use crate::action::redaction::RedactedAction;
use crate::action::variants::{Action, OperationOutput};
use crate::ui::ToastLevel;

fn redacted_debug(action: &Action) -> String {
    format!("{:?}", RedactedAction(action))
}

#[test]
fn test_redact_submit_form() {
    let action = Action::SubmitForm {
        form: sample_new_tenant_form(),
        flags: SubmitFlags::commit().creating_tenant(),
    };
    let output = redacted_debug(&action);

    assert!(!output.contains("owner@example.com"), "Should not contain e-mail");
    assert!(!output.contains("SD-0001234"), "Should not contain ticket");
    assert!(output.contains("SubmitForm"));
    assert!(output.contains("12 fields"));
    assert!(output.contains("push_to_db=true"));
}

#[test]
fn test_redact_check_tenant() {
    let action = Action::CheckTenant(TenantResourcesRequest {
        tenant: "if_cosd_secret_tenant".to_string(),
        users: vec!["if_cosd_a".to_string(), "if_cosd_b".to_string()],
        buckets: vec![],
        mode: ResourceMode::Create,
    });
    let output = redacted_debug(&action);

    assert!(!output.contains("secret_tenant"));
    assert!(output.contains("CheckTenant(<2 users, 0 buckets>"));
}

#[test]
fn test_redact_deactivate() {
    let action = Action::Deactivate(DeactivationRequest {
        tenant: "if_cosd_t".to_string(),
        users: vec![],
        buckets: vec!["if-cosd-b".to_string()],
    });
    let output = redacted_debug(&action);
    assert!(!output.contains("if-cosd-b"));
    assert!(output.contains("1 buckets"));
}

#[test]
fn test_redact_search_results() {
    let rows = vec![CheckResult {
        tenant: "if_cosd_t".to_string(),
        owner: "owner@example.com".to_string(),
        ..Default::default()
    }];
    let action = Action::OperationFinished(OperationOutput::completed(
        ProvisioningOutcome::Search(rows),
    ));
    let output = redacted_debug(&action);

    assert!(!output.contains("owner@example.com"));
    assert!(output.contains("Search(<1 rows>)"));
}

#[test]
fn test_redact_failure_text() {
    let action = Action::OperationFinished(OperationOutput::Failed(
        "An error occurred: tenant if_cosd_t not found".to_string(),
    ));
    let output = redacted_debug(&action);
    assert_eq!(output, "OperationFinished(<error>)");
}

#[test]
fn test_redact_clipboard_and_notify() {
    let copy = Action::CopyToClipboard("s3 user create if_cosd_app".to_string());
    assert_eq!(redacted_debug(&copy), "CopyToClipboard(<26 chars>)");

    let notify = Action::Notify(ToastLevel::Error, "secret path".to_string());
    let output = redacted_debug(&notify);
    assert!(!output.contains("secret"));
    assert!(output.contains("11 chars"));
}

#[test]
fn test_redact_export_and_choice() {
    let export = Action::ExportSearch {
        header: vec!["Tenant".to_string()],
        rows: vec![vec!["if_cosd_t".to_string()]],
        path: PathBuf::from("exports/search_results.csv"),
    };
    let output = redacted_debug(&export);
    assert!(!output.contains("if_cosd_t"));
    assert!(output.contains("1 rows"));

    let (respond_to, _rx) = tokio::sync::oneshot::channel();
    let choice = Action::ClusterChoiceRequested(ClusterChoiceRequest {
        clusters: vec![Cluster::default(), Cluster::default()],
        respond_to,
    });
    assert_eq!(redacted_debug(&choice), "ClusterChoiceRequested(<2 clusters>)");
}

#[test]
fn test_simple_actions_fall_through() {
    assert_eq!(redacted_debug(&Action::Quit), "Quit");
    assert_eq!(redacted_debug(&Action::Resize(80, 24)), "Resize(80, 24)");
}

#[test]
fn test_side_effect_classification() {
    assert!(
        Action::Search(zayavki_client::SearchCriteria::default()).is_side_effect()
    );
    assert!(!Action::Tick.is_side_effect());
    assert!(!Action::CopyToClipboard(String::new()).is_side_effect());
}
