//! Configuration management for the zayavki provisioning client.
//!
//! This crate resolves where the provisioning backend lives and how the
//! terminal client talks to it, from `.env` files, environment variables
//! and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
