//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Client creation
//! - Configuration loading
//! - Async side effect handlers for backend calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `zayavki_tui::app` and `zayavki_tui::ui`).
//! - Wire formats of the backend (see `zayavki_client`).
//!
//! Invariants:
//! - Side effects run in tracked tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
