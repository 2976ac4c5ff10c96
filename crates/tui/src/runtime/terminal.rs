//! Terminal mode switching.
//!
//! Responsibilities:
//! - Enter raw mode, the alternate screen and (optionally) mouse capture.
//! - Put the terminal back exactly once: explicitly on a clean exit, or from
//!   `Drop` when `main` unwinds or returns early with an error.
//!
//! Does NOT handle:
//! - Drawing (the ratatui `Terminal` is created on top of the guard).
//!
//! Invariants:
//! - Drop never panics; restore errors there are ignored.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Owns the terminal modes for the lifetime of the TUI session.
pub struct TerminalGuard {
    mouse_capture: bool,
    restored: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// If a later step fails, the steps already taken are undone.
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            mouse_capture,
            restored: false,
        };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse_capture {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(guard)
    }

    /// Leave TUI mode. Later calls are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.mouse_capture {
            execute!(stdout, DisableMouseCapture)?;
        }
        execute!(stdout, LeaveAlternateScreen)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
