//! Configuration types for the zayavki client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the top-level `Config` combining connection and export settings.
//!
//! Does NOT handle:
//! - Loading values from `.env`/environment (see `loader` module).
//! - Opening connections (see the client crate).
//!
//! Invariants:
//! - `base_url` never carries a trailing slash once built by `ConfigLoader`.
//! - Default values come from `constants`, not magic numbers.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_EXPORT_DIR, DEFAULT_TIMEOUT_SECS};

/// Connection settings for the provisioning backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Backend origin, e.g. `https://provisioning.example.com`
    pub base_url: String,
    /// Accept self-signed certificates on https endpoints
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Fully resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub connection: ConnectionConfig,
    /// Directory CSV exports are written to
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}
