//! Provisioning client creation.
//!
//! Responsibilities:
//! - Create a client from the loaded configuration.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).

use anyhow::{Context, Result};
use zayavki_client::ProvisioningClient;
use zayavki_config::Config;

/// Create a new provisioning client.
///
/// # Errors
///
/// Returns an error if the base URL is invalid or the HTTP client cannot
/// be built.
pub fn create_client(config: &Config) -> Result<ProvisioningClient> {
    ProvisioningClient::builder()
        .from_config(config)
        .build()
        .with_context(|| format!("cannot create client for {}", config.connection.base_url))
}
