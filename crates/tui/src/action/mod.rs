//! Action protocol for async TUI event handling.
//!
//! Actions represent user input, requests to the provisioning backend, and
//! the results those requests send back to the event loop.
//!
//! # Module Structure
//!
//! - `redaction`: Logging wrapper that hides form payloads (`RedactedAction`)
//! - `variants`: Action enum definitions (`Action`, `OperationOutput`)
//! - `tests`: Redaction tests
//!
//! # Security Note
//!
//! Form values carry e-mail addresses and ticket numbers. When logging
//! Actions, use `RedactedAction(&action)` instead of `?action`.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Async task execution (handled by the runtime module)
//! - UI rendering (handled by the ui module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, OperationOutput};

#[cfg(test)]
mod tests;
