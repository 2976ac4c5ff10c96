//! UI rendering modules for the TUI.
//!
//! Drawing of the result area, popups and toasts, kept apart from the app
//! state management.

pub mod popup;
pub mod results;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel};
