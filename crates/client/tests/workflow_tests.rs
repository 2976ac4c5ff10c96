//! Submission workflow tests.
//!
//! # Invariants
//! - A single cluster candidate is resubmitted without consulting the chooser
//! - Several candidates are all offered to the chooser
//! - A cancelled choice sends nothing to the `cluster` route

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use zayavki_client::{ProvisioningOutcome, SubmitFlags, WorkflowOutcome, WorkflowPhase, Submission};

#[tokio::test]
async fn test_plain_reply_completes_without_cluster() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zayavki/submit"))
        .and(body_string_contains("create_tenant"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture_text("submit/final.txt")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zayavki/cluster"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chooser = RecordingChooser::cancelling();
    let mut submission = Submission::new(&client, &chooser);
    let outcome = submission
        .submit(&sample_new_tenant_form(), new_tenant_check())
        .await
        .unwrap();

    match outcome {
        WorkflowOutcome::Completed {
            outcome: ProvisioningOutcome::Text(text),
            selected_cluster: None,
        } => assert!(text.starts_with("Тенант: if_cosd_gen_01")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(chooser.offers().is_empty());
    assert_eq!(submission.phase(), WorkflowPhase::Done);
}

#[tokio::test]
async fn test_single_cluster_is_resubmitted_automatically() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zayavki/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture_text("submit/cluster_selection_one.txt")),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zayavki/cluster"))
        .and(body_partial_json(json!({
            "selectedCluster": {"Кластер": "cl-ift-01", "ЦОД": "DC1"},
            "pushToDb": false,
            "processedVars": {"env_code": ["if"], "segment": ["B2B-CLOUD"], "create_tenant": ["true"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("created on cl-ift-01"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chooser = RecordingChooser::cancelling();
    let mut submission = Submission::new(&client, &chooser);
    let outcome = submission
        .submit(&sample_new_tenant_form(), new_tenant_check())
        .await
        .unwrap();

    match outcome {
        WorkflowOutcome::Completed {
            outcome: ProvisioningOutcome::Text(text),
            selected_cluster: Some(cluster),
        } => {
            assert_eq!(text, "created on cl-ift-01");
            assert_eq!(cluster.name, "cl-ift-01");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(chooser.offers().is_empty(), "chooser must not be shown");
    assert!(
        !submission
            .history()
            .contains(&WorkflowPhase::AwaitingClusterChoice)
    );
    assert!(submission.history().contains(&WorkflowPhase::Resubmitting));
}

#[tokio::test]
async fn test_two_clusters_are_offered_and_choice_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zayavki/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture_text("submit/cluster_selection_two.txt")),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zayavki/cluster"))
        .and(body_partial_json(json!({
            "selectedCluster": {"Кластер": "cl-ift-02"},
            "pushToDb": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("committed"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chooser = RecordingChooser::picking(1);
    let mut submission = Submission::new(&client, &chooser);
    let outcome = submission
        .submit(&sample_new_tenant_form(), SubmitFlags::commit().creating_tenant())
        .await
        .unwrap();

    let offers = chooser.offers();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].len(), 2);
    assert_eq!(offers[0][0].display_label(), "cl-ift-01 (DC1)");
    assert_eq!(offers[0][1].display_label(), "cl-ift-02 (DC2)");
    assert!(matches!(
        outcome,
        WorkflowOutcome::Completed { selected_cluster: Some(ref c), .. } if c.name == "cl-ift-02"
    ));
    assert_eq!(
        submission.history(),
        &[
            WorkflowPhase::Collecting,
            WorkflowPhase::Submitting,
            WorkflowPhase::AwaitingClusterChoice,
            WorkflowPhase::Resubmitting,
            WorkflowPhase::Done,
        ]
    );
}

#[tokio::test]
async fn test_cancelled_choice_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zayavki/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture_text("submit/cluster_selection_two.txt")),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zayavki/cluster"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chooser = RecordingChooser::cancelling();
    let mut submission = Submission::new(&client, &chooser);
    let outcome = submission
        .submit(&sample_new_tenant_form(), new_tenant_check())
        .await
        .unwrap();

    assert_eq!(outcome, WorkflowOutcome::Abandoned);
    assert_eq!(chooser.offers()[0].len(), 2);
    assert_eq!(submission.phase(), WorkflowPhase::Done);
}

#[tokio::test]
async fn test_empty_cluster_list_is_no_matching_cluster() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zayavki/submit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("CLUSTER_SELECTION_REQUIRED:[]"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zayavki/cluster"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chooser = RecordingChooser::picking(0);
    let mut submission = Submission::new(&client, &chooser);
    let err = submission
        .submit(&sample_new_tenant_form(), new_tenant_check())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NoMatchingCluster(_)));
    assert!(chooser.offers().is_empty());
    assert_eq!(submission.phase(), WorkflowPhase::Done);
}

#[tokio::test]
async fn test_resubmission_failure_ends_in_done_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zayavki/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture_text("submit/cluster_selection_one.txt")),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zayavki/cluster"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let chooser = RecordingChooser::cancelling();
    let mut submission = Submission::new(&client, &chooser);
    let err = submission
        .submit(&sample_new_tenant_form(), new_tenant_check())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "database unavailable");
    assert_eq!(submission.phase(), WorkflowPhase::Done);
}
