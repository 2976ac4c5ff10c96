//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
#[allow(unused_imports)]
pub use zayavki_client::endpoints;
#[allow(unused_imports)]
pub use zayavki_client::testing::{
    RecordingChooser, load_fixture, load_fixture_text, new_tenant_check, sample_new_tenant_form,
};
#[allow(unused_imports)]
pub use zayavki_client::{ClientError, ProvisioningClient};

/// Client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> ProvisioningClient {
    ProvisioningClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Client with a short timeout for delay tests.
#[allow(dead_code)]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> ProvisioningClient {
    ProvisioningClient::builder()
        .base_url(server.uri())
        .timeout(timeout)
        .build()
        .expect("client should build")
}
