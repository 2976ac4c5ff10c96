//! Command-line argument parsing for zayavki-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `zayavki_config`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for zayavki-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (`ZAYAVKI_BASE_URL`, `ZAYAVKI_TIMEOUT`, ...)
/// 3. `.env` file in the working directory
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "zayavki-tui",
    about = "Terminal UI for provisioning S3 tenants, users and buckets",
    version,
    after_help = "Examples:\n  zayavki-tui\n  zayavki-tui --base-url https://zayavki.example.com\n  zayavki-tui --export-dir ~/exports --no-mouse\n"
)]
pub struct Cli {
    /// Base URL of the provisioning backend
    #[arg(long)]
    pub base_url: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory the search export is written to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["zayavki-tui"]);
        assert_eq!(cli.base_url, None);
        assert!(!cli.skip_verify);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_cli_no_mouse_flag() {
        let cli = Cli::parse_from(["zayavki-tui", "--no-mouse"]);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_cli_connection_flags() {
        let cli = Cli::parse_from([
            "zayavki-tui",
            "--base-url",
            "https://zayavki.example.com",
            "--skip-verify",
            "--timeout",
            "60",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("https://zayavki.example.com"));
        assert!(cli.skip_verify);
        assert_eq!(cli.timeout, Some(60));
    }
}
