//! Zayavki TUI Library
//!
//! This library provides the application state, form model and UI
//! components for the provisioning terminal interface.
//!
//! # Example
//!
//! ```rust
//! use zayavki_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//!
//! let mut app = App::default();
//! let quit = app.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
//! assert!(matches!(quit, Some(Action::Quit)));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod export;
pub mod forms;
pub mod results;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, ConnectionContext, FOOTER_HEIGHT, HEADER_HEIGHT, Popup};
pub use ui::toast::{Toast, ToastLevel};
