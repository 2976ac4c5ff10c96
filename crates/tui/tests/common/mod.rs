//! Common test utilities for TUI side effects tests.
//!
//! This module provides shared helper functions and types for testing the TUI's
//! async side effect handlers. It uses wiremock to mock HTTP responses from
//! the provisioning backend.
//!
//! # Invariants
//! - Fixtures are loaded from the client's fixtures directory
//! - All mock servers use random available ports to avoid conflicts
//! - Each test gets its own isolated mock server and channels
//!
//! # What this does NOT handle
//! - TUI rendering or terminal management

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::matchers::{method, path};
pub use wiremock::{Mock, MockServer, ResponseTemplate};
pub use zayavki_client::testing::{load_fixture, load_fixture_text};
pub use zayavki_client::{ChannelClusterChooser, ClusterChoiceRequest, ProvisioningClient};
pub use zayavki_tui::action::{Action, OperationOutput};
pub use zayavki_tui::runtime::side_effects::{
    SharedClient, SideEffectContext, TaskTracker, handle_side_effects,
};

/// Route on the mock server for a backend endpoint.
pub fn route(name: &str) -> String {
    format!("/zayavki/{name}")
}

/// Test harness for side effects testing.
///
/// Provides a mock HTTP server, the action channel, the cluster choice
/// channel and a shared client pointing at the mock server.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Receiver for cluster choices the handlers are waiting on
    pub choice_rx: Receiver<ClusterChoiceRequest>,
    pub context: SideEffectContext,
    pub task_tracker: TaskTracker,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let (choice_tx, choice_rx) = mpsc::channel::<ClusterChoiceRequest>(4);

        let client = create_test_client(&mock_server.uri());
        let context = SideEffectContext::new(client, ChannelClusterChooser::new(choice_tx), action_tx);

        Self {
            mock_server,
            action_rx,
            choice_rx,
            context,
            task_tracker: TaskTracker::new(),
        }
    }

    /// Mount a plain-text reply for `route_name`.
    pub async fn mount_text(&self, route_name: &str, body: impl Into<String>) {
        Mock::given(method("POST"))
            .and(path(route(route_name)))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
            .mount(&self.mock_server)
            .await;
    }

    /// Mount a JSON fixture as the reply for `route_name`.
    pub async fn mount_fixture(&self, route_name: &str, fixture: &str) {
        Mock::given(method("POST"))
            .and(path(route(route_name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
            .mount(&self.mock_server)
            .await;
    }

    /// Dispatch an action; the dispatcher itself must return promptly.
    pub async fn dispatch(&self, action: Action) {
        let handle_future =
            handle_side_effects(action, self.context.clone(), self.task_tracker.clone());
        match tokio::time::timeout(Duration::from_millis(500), handle_future).await {
            Ok(()) => {}
            Err(_) => {
                panic!(
                    "handle_side_effects timed out - it may be blocking on network I/O instead of spawning tasks"
                );
            }
        }
    }

    /// Dispatch an action and wait for the next action sent back.
    pub async fn handle_and_expect(&mut self, action: Action) -> Action {
        self.dispatch(action).await;
        self.expect_action(5_000).await
    }

    /// Expect a specific action within a timeout.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv())
            .await
            .expect("Timeout waiting for action")
            .expect("Channel closed while waiting for action")
    }

    /// Expect a cluster choice request within a timeout.
    pub async fn expect_choice(&mut self, timeout_ms: u64) -> ClusterChoiceRequest {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.choice_rx.recv())
            .await
            .expect("Timeout waiting for cluster choice")
            .expect("Choice channel closed")
    }

    /// Drain all pending actions from the channel.
    pub async fn drain_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(Some(action)) =
            tokio::time::timeout(Duration::from_millis(50), self.action_rx.recv()).await
        {
            actions.push(action);
        }
        actions
    }

    /// Names of the routes the mock server received, in order.
    pub async fn received_routes(&self) -> Vec<String> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

/// Create a test client pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = ProvisioningClient::builder()
        .base_url(mock_uri.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");

    Arc::new(client)
}

/// Unwrap a finished operation.
pub fn operation_output(action: Action) -> OperationOutput {
    match action {
        Action::OperationFinished(output) => output,
        other => panic!("expected OperationFinished, got {other:?}"),
    }
}
