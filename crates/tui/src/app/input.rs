//! Keyboard input for the TUI app.
//!
//! Responsibilities:
//! - Global bindings: tab switching, focus movement, buttons, copy, export.
//! - Forward editing keys to the focused input and re-run its validator.
//! - Route keys to the open popup first.
//!
//! Non-responsibilities:
//! - Does NOT talk to the backend (returns Actions).
//!
//! Key map:
//! - `F1`..`F5` switch tabs, `Tab`/`Shift+Tab` move focus.
//! - `Ctrl+R` search or check, `Ctrl+S` commit, `Ctrl+L` clear tab,
//!   `Ctrl+X` clear all tabs, `Ctrl+O` JSON import.
//! - `Ctrl+Y` copy commands, `Ctrl+P` export search results.
//! - `PageUp`/`PageDown` and the mouse wheel scroll results, `Ctrl+C` quit.

pub mod components;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::App;
use crate::forms::registry::ButtonBehavior;
use crate::forms::{TabId, tab_config};
use crate::ui::Toast;

const SCROLL_STEP: u16 = 10;
const WHEEL_STEP: u16 = 3;

/// What currently has keyboard focus on the tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(usize),
    Button(usize),
}

impl App {
    /// Number of focusable elements on the active tab.
    fn focus_len(&self) -> usize {
        self.form.len() + tab_config(self.active_tab).buttons.len()
    }

    pub fn focus_target(&self) -> FocusTarget {
        let fields = self.form.len();
        if self.focus < fields {
            FocusTarget::Field(self.focus)
        } else {
            FocusTarget::Button(self.focus - fields)
        }
    }

    pub fn focus_next(&mut self) {
        let len = self.focus_len();
        if len > 0 {
            self.focus = (self.focus + 1) % len;
        }
    }

    pub fn focus_previous(&mut self) {
        let len = self.focus_len();
        if len > 0 {
            self.focus = (self.focus + len - 1) % len;
        }
    }

    /// Handle a key press; returns the action to run, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if self.popup.is_some() {
            return self.handle_popup_input(key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Char('r') if ctrl => {
                let behavior = if self.active_tab == TabId::Search {
                    ButtonBehavior::Search
                } else {
                    ButtonBehavior::Check
                };
                return self.press(behavior);
            }
            KeyCode::Char('s') if ctrl => return self.press(ButtonBehavior::Commit),
            KeyCode::Char('l') if ctrl => return self.press(ButtonBehavior::Clear),
            KeyCode::Char('x') if ctrl => return self.press(ButtonBehavior::ClearAll),
            KeyCode::Char('o') if ctrl => return self.press(ButtonBehavior::ImportJson),
            KeyCode::Char('y') if ctrl => return self.copy_commands_action(),
            KeyCode::Char('p') if ctrl => return self.export_action(),
            KeyCode::F(n @ 1..=5) => {
                self.switch_tab(TabId::ALL[usize::from(n - 1)]);
                return None;
            }
            KeyCode::Tab => {
                self.focus_next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return None;
            }
            KeyCode::PageDown => {
                self.scroll_results_down(SCROLL_STEP);
                return None;
            }
            KeyCode::PageUp => {
                self.result_scroll = self.result_scroll.saturating_sub(SCROLL_STEP);
                return None;
            }
            _ => {}
        }

        match self.focus_target() {
            FocusTarget::Field(index) => {
                self.edit_field(index, key);
                None
            }
            FocusTarget::Button(index) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let behavior = tab_config(self.active_tab).buttons.get(index)?.behavior;
                    self.press(behavior)
                }
                KeyCode::Left | KeyCode::Up => {
                    self.focus_previous();
                    None
                }
                KeyCode::Right | KeyCode::Down => {
                    self.focus_next();
                    None
                }
                _ => None,
            },
        }
    }

    fn edit_field(&mut self, index: usize, key: KeyEvent) {
        let Some(spec) = self.form.spec(index) else {
            return;
        };
        let Some(input) = self.form.input_mut(index) else {
            return;
        };
        if key.code == KeyCode::Enter && !input.is_multiline() {
            self.focus_next();
            return;
        }
        input.handle_key(key);
        self.revalidate_field(spec.id);
    }

    /// Mouse wheel scrolls the result area; other mouse input is ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.popup.is_some() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_results_down(WHEEL_STEP),
            MouseEventKind::ScrollUp => {
                self.result_scroll = self.result_scroll.saturating_sub(WHEEL_STEP);
            }
            _ => {}
        }
    }

    fn scroll_results_down(&mut self, step: u16) {
        let max = self.results.plain_lines().len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.result_scroll = self.result_scroll.saturating_add(step).min(max);
    }

    fn copy_commands_action(&mut self) -> Option<Action> {
        match self.results.copyable_commands() {
            Some(text) if !text.trim().is_empty() => Some(Action::CopyToClipboard(text.to_string())),
            _ => {
                self.toasts.push(Toast::info("Nothing to copy"));
                None
            }
        }
    }

    fn export_action(&mut self) -> Option<Action> {
        let Some((header, rows)) = self.results.export_table() else {
            self.toasts.push(Toast::info("No search results to export"));
            return None;
        };
        Some(Action::ExportSearch {
            header: header.to_vec(),
            rows: rows.to_vec(),
            path: self.export_path(),
        })
    }
}
