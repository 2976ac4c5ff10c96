//! Centralized constants for the zayavki workspace.
//!
//! Default values shared by the config, client and TUI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path prefix every provisioning route lives under.
pub const API_PREFIX: &str = "zayavki";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Export Defaults
// =============================================================================

/// Directory search result exports are written to.
pub const DEFAULT_EXPORT_DIR: &str = ".";

/// File name of the search result export.
pub const SEARCH_EXPORT_FILE_NAME: &str = "search_results.csv";

// =============================================================================
// UI Defaults
// =============================================================================

/// Capacity of the action channel between input, side effects and the app.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// UI redraw tick in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Number of characters of copied text echoed back in the status line.
pub const DEFAULT_CLIPBOARD_PREVIEW_CHARS: usize = 30;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "ZAYAVKI_BASE_URL";
pub const ENV_SKIP_VERIFY: &str = "ZAYAVKI_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "ZAYAVKI_TIMEOUT";
pub const ENV_EXPORT_DIR: &str = "ZAYAVKI_EXPORT_DIR";
