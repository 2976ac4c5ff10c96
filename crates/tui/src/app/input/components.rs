//! Editable widgets behind the form fields.
//!
//! Text and e-mail fields use [`SingleLineInput`] (tui-input), line-list
//! fields use [`MultiLineInput`] (tui-textarea) and selects use
//! [`SelectInput`]. All three expose the same `value`/`set_value` pair so the
//! form can read and restore them without knowing which widget it holds.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Block};
use tui_input::{Input, InputRequest};

use crate::forms::registry::SelectOption;

/// Single-line text input.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
    placeholder: Option<String>,
}

impl SingleLineInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input: Input::new(value.into()),
            placeholder: None,
        }
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: Some(placeholder.into()),
        }
    }

    /// Apply an editing key. Unhandled keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                KeyCode::Char('k') => {
                    let kept: String = self.input.value().chars().take(self.input.cursor()).collect();
                    self.input = Input::new(kept);
                    None
                }
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Replace the value; the cursor moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Horizontal scroll needed to keep the cursor inside `width` columns.
    pub fn visual_scroll(&self, width: usize) -> usize {
        self.input.visual_scroll(width)
    }
}

impl From<&str> for SingleLineInput {
    fn from(s: &str) -> Self {
        Self::with_value(s)
    }
}

/// Multi-line input for one-entry-per-line fields.
pub struct MultiLineInput<'a> {
    textarea: tui_textarea::TextArea<'a>,
}

impl<'a> MultiLineInput<'a> {
    pub fn new() -> Self {
        Self {
            textarea: tui_textarea::TextArea::default(),
        }
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_placeholder_text(placeholder);
        Self { textarea }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// Lines joined with `\n`.
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the content, keeping placeholder and styling.
    pub fn set_value(&mut self, value: impl AsRef<str>) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(value.as_ref());
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    pub fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    pub fn set_style(&mut self, style: Style) {
        self.textarea.set_style(style);
    }

    pub fn set_block(&mut self, block: Block<'a>) {
        self.textarea.set_block(block);
    }

    pub fn set_cursor_style(&mut self, style: Style) {
        self.textarea.set_cursor_style(style);
    }
}

impl Default for MultiLineInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl ratatui::widgets::Widget for &MultiLineInput<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        ratatui::widgets::Widget::render(&self.textarea, area, buf);
    }
}

/// Fixed-choice field cycled with the arrow keys.
#[derive(Debug, Clone, Copy)]
pub struct SelectInput {
    options: &'static [SelectOption],
    selected: usize,
}

impl SelectInput {
    pub fn new(options: &'static [SelectOption]) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                if self.selected >= last { 0 } else { self.selected + 1 }
            }
            KeyCode::Left | KeyCode::Up => {
                if self.selected == 0 { last } else { self.selected - 1 }
            }
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.selected,
        };
    }

    pub fn value(&self) -> &'static str {
        self.options.get(self.selected).map(|o| o.value).unwrap_or("")
    }

    pub fn label(&self) -> &'static str {
        self.options.get(self.selected).map(|o| o.label).unwrap_or("")
    }

    /// Select the option whose value matches `value` (case-insensitive).
    ///
    /// An unknown value falls back to the first option, the empty choice.
    pub fn set_value(&mut self, value: &str) {
        self.selected = self
            .options
            .iter()
            .position(|o| o.value.eq_ignore_ascii_case(value.trim()))
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[SelectOption] = &[
        SelectOption {
            value: "",
            label: "Выберите среду",
        },
        SelectOption {
            value: "PROD",
            label: "PROD",
        },
        SelectOption {
            value: "IFT",
            label: "IFT",
        },
    ];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_single_line_typing_and_backspace() {
        let mut input = SingleLineInput::new();
        for c in "if_cosd".chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "if_cos");
        assert_eq!(input.cursor_position(), 6);
    }

    #[test]
    fn test_single_line_unicode_cursor() {
        let mut input = SingleLineInput::with_value("Среда");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "Седа");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_single_line_ctrl_k_truncates() {
        let mut input = SingleLineInput::with_value("SD-0001234");
        input.handle_key(key(KeyCode::Home));
        for _ in 0..3 {
            input.handle_key(key(KeyCode::Right));
        }
        input.handle_key(ctrl('k'));
        assert_eq!(input.value(), "SD-");
    }

    #[test]
    fn test_single_line_ctrl_u_clears() {
        let mut input = SingleLineInput::with_value("owner@example.com");
        input.handle_key(ctrl('u'));
        assert!(input.is_empty());
    }

    #[test]
    fn test_single_line_placeholder() {
        let input = SingleLineInput::with_placeholder("INET-DEVTEST-SYNT");
        assert_eq!(input.placeholder(), Some("INET-DEVTEST-SYNT"));
        assert!(input.is_empty());
    }

    #[test]
    fn test_multi_line_set_value_round_trips_lines() {
        let mut input = MultiLineInput::with_placeholder("bucket | 100");
        assert!(input.is_empty());
        input.set_value("if-cosd-a | 100\nif-cosd-b | 200");
        assert_eq!(input.value(), "if-cosd-a | 100\nif-cosd-b | 200");
        assert_eq!(input.line_count(), 2);

        input.set_value("");
        assert!(input.is_empty());
    }

    #[test]
    fn test_multi_line_enter_starts_new_line() {
        let mut input = MultiLineInput::new();
        input.handle_key(key(KeyCode::Char('a')));
        input.handle_key(key(KeyCode::Enter));
        input.handle_key(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "a\nb");
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let mut select = SelectInput::new(OPTIONS);
        assert_eq!(select.value(), "");
        assert_eq!(select.label(), "Выберите среду");

        select.handle_key(key(KeyCode::Right));
        assert_eq!(select.value(), "PROD");
        select.handle_key(key(KeyCode::Right));
        select.handle_key(key(KeyCode::Right));
        assert_eq!(select.value(), "");

        select.handle_key(key(KeyCode::Left));
        assert_eq!(select.value(), "IFT");
    }

    #[test]
    fn test_select_set_value() {
        let mut select = SelectInput::new(OPTIONS);
        select.set_value("ift");
        assert_eq!(select.value(), "IFT");
        select.set_value("HOTFIX");
        assert_eq!(select.value(), "");
    }
}
