//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//!
//! Does NOT handle:
//! - Creating the client (see `runtime::client`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` file > defaults.
//! - `load_dotenv()` is called before reading the environment.

use std::time::Duration;

use anyhow::Result;
use zayavki_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Load configuration, applying CLI overrides on top of the environment.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new().load_dotenv()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(dir) = &cli.export_dir {
        loader = loader.with_export_dir(dir.clone());
    }

    let config = loader.from_env()?.build()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use zayavki_config::constants::{ENV_BASE_URL, ENV_TIMEOUT};

    #[test]
    #[serial]
    fn test_cli_overrides_environment() {
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                (ENV_BASE_URL, Some("http://from-env:8080")),
                (ENV_TIMEOUT, Some("5")),
            ],
            || {
                let cli = Cli::parse_from(["zayavki-tui", "--base-url", "http://from-cli:9090"]);
                let config = load_config(&cli).unwrap();
                assert_eq!(config.connection.base_url, "http://from-cli:9090");
                assert_eq!(config.connection.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    #[serial]
    fn test_export_dir_from_cli() {
        let vars = [
            ("DOTENV_DISABLED", Some("1")),
            (ENV_BASE_URL, Some("http://localhost:8080")),
        ];
        temp_env::with_vars(vars, || {
            let cli = Cli::parse_from(["zayavki-tui", "--export-dir", "out"]);
            let config = load_config(&cli).unwrap();
            assert_eq!(config.export_dir, std::path::PathBuf::from("out"));
        });
    }
}
