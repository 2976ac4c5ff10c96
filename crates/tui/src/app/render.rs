//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header with tabs, form pane, result pane, footer)
//! - Lay out the active tab's fields, messages and buttons
//! - Dispatch to popup and toast renderers
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except `last_area` and popup list selection)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::app::form::FieldInput;
use crate::app::input::FocusTarget;
use crate::app::state::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::forms::TabId;
use crate::forms::registry::FieldSpec;
use crate::forms::tab_config;
use crate::forms::validation::ValidationMessage;
use crate::ui::popup::render_popup;
use crate::ui::results::render_results;
use crate::ui::theme::{Theme, spinner_char};
use crate::ui::toast::render_toasts;

const LABEL_WIDTH: u16 = 30;
const TEXTAREA_HEIGHT: u16 = 5;
const BUTTON_ROW_HEIGHT: u16 = 1;

/// Rows a field occupies, including its validation line.
fn field_height(input: &FieldInput, has_message: bool) -> u16 {
    let body = if input.is_multiline() {
        TEXTAREA_HEIGHT
    } else {
        1
    };
    body + u16::from(has_message)
}

/// First field index to draw so that `focused` ends inside `available` rows.
fn first_visible(heights: &[u16], focused: Option<usize>, available: u16) -> usize {
    let Some(focused) = focused else {
        return 0;
    };
    let mut start = 0;
    while start < focused {
        let used: u16 = heights[start..=focused].iter().sum();
        if used <= available {
            break;
        }
        start += 1;
    }
    start
}

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        self.render_form(f, body[0]);
        render_results(
            f,
            body[1],
            &self.results,
            self.result_scroll,
            self.copy_feedback_active(),
            &self.theme,
        );

        self.render_footer(f, chunks[2]);

        let theme = self.theme;
        if let Some(popup) = self.popup.as_mut() {
            render_popup(f, popup, &theme);
        }
        render_toasts(f, &self.toasts, &theme);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab.label())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .style(theme.text_dim())
            .highlight_style(theme.highlight())
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" Заявки | {} ", self.connection.base_url),
                        theme.title(),
                    ))
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            );
        f.render_widget(tabs, area);
    }

    fn render_form(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = Block::default()
            .title(Span::styled(self.active_tab.title(), theme.title()))
            .borders(Borders::ALL)
            .border_style(theme.border());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(BUTTON_ROW_HEIGHT)])
            .split(inner);
        let (fields_area, buttons_area) = (parts[0], parts[1]);

        let focus = self.focus_target();
        let focused_field = match focus {
            FocusTarget::Field(i) => Some(i),
            FocusTarget::Button(_) => None,
        };

        let heights: Vec<u16> = self
            .form
            .fields()
            .map(|(spec, input)| field_height(input, self.validation.contains_key(spec.id)))
            .collect();
        let start = first_visible(&heights, focused_field, fields_area.height);

        let mut y = fields_area.y;
        let bottom = fields_area.y + fields_area.height;
        for (index, (spec, input)) in self.form.fields().enumerate().skip(start) {
            let height = heights[index];
            if y + height > bottom {
                break;
            }
            let row = Rect::new(fields_area.x, y, fields_area.width, height);
            self.render_field(
                f,
                row,
                spec,
                input,
                self.validation.get(spec.id),
                focused_field == Some(index),
            );
            y += height;
        }

        self.render_buttons(f, buttons_area, focus);
    }

    fn render_field(
        &self,
        f: &mut Frame,
        row: Rect,
        spec: &FieldSpec,
        input: &FieldInput,
        message: Option<&ValidationMessage>,
        focused: bool,
    ) {
        let theme = &self.theme;
        let label_width = LABEL_WIDTH.min(row.width / 2);
        let label_style = if focused {
            theme.title()
        } else {
            theme.text()
        };
        let mut label = vec![Span::styled(spec.label, label_style)];
        if spec.required {
            label.push(Span::styled(" *", theme.error()));
        }
        f.render_widget(
            Paragraph::new(Line::from(label)),
            Rect::new(row.x, row.y, label_width, 1),
        );

        let input_width = row.width.saturating_sub(label_width);
        let input_x = row.x + label_width;
        let body_height = row.height - u16::from(message.is_some());

        match input {
            FieldInput::Line(line) => {
                let area = Rect::new(input_x, row.y, input_width, 1);
                let width = usize::from(area.width.max(1));
                let scroll = line.visual_scroll(width);
                let paragraph = if line.is_empty() && !focused {
                    Paragraph::new(Span::styled(
                        line.placeholder().unwrap_or_default().to_string(),
                        theme.disabled(),
                    ))
                } else {
                    Paragraph::new(line.value())
                        .style(field_style(theme, focused))
                        .scroll((0, u16::try_from(scroll).unwrap_or(0)))
                };
                f.render_widget(paragraph, area);
                if focused && self.popup.is_none() {
                    let cursor = line.cursor_position().saturating_sub(scroll);
                    let offset = u16::try_from(cursor).unwrap_or(0).min(area.width);
                    f.set_cursor_position(Position::new(area.x + offset, area.y));
                }
            }
            FieldInput::Select(select) => {
                let text = format!("< {} >", select.label());
                f.render_widget(
                    Paragraph::new(text).style(field_style(theme, focused)),
                    Rect::new(input_x, row.y, input_width, 1),
                );
            }
            FieldInput::Lines(lines) => {
                let area = Rect::new(input_x, row.y, input_width, body_height);
                let block = Block::default().borders(Borders::ALL).border_style(if focused {
                    theme.border_focused()
                } else {
                    theme.border()
                });
                let inner = block.inner(area);
                f.render_widget(block, area);
                f.render_widget(lines, inner);
            }
        }

        if let Some(message) = message {
            let style = if message.is_error() {
                theme.error()
            } else {
                theme.warning()
            };
            f.render_widget(
                Paragraph::new(Span::styled(message.text.clone(), style)),
                Rect::new(input_x, row.y + body_height, input_width, 1),
            );
        }
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect, focus: FocusTarget) {
        let theme = &self.theme;
        let busy = self.is_busy();
        let mut spans = Vec::new();
        for (index, button) in tab_config(self.active_tab).buttons.iter().enumerate() {
            let style = if busy && button.behavior.sends_request() {
                theme.disabled()
            } else if focus == FocusTarget::Button(index) {
                theme.highlight()
            } else {
                theme.text().add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(format!("[ {} ]", button.label), style));
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let status = match &self.pending {
            Some(pending) => Span::styled(
                format!(
                    " {} {}... ",
                    spinner_char(self.spinner_frame),
                    pending.kind.label()
                ),
                theme.warning(),
            ),
            None => Span::styled(" Готово ", theme.success()),
        };
        let hints = Span::styled(
            "F1-F5 вкладки | Tab поле | Ctrl+R проверка/поиск | Ctrl+S отправить | \
             Ctrl+L очистить | Ctrl+O JSON | Ctrl+Y копировать | Ctrl+P экспорт | Ctrl+C выход",
            theme.text_dim(),
        );
        let footer = Paragraph::new(Line::from(vec![status, Span::raw("|"), Span::raw(" "), hints]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            );
        f.render_widget(footer, area);
    }
}

fn field_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        theme.text().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_first_visible_keeps_focus_on_screen() {
        let heights = [1, 5, 1, 5, 1];
        assert_eq!(first_visible(&heights, None, 4), 0);
        assert_eq!(first_visible(&heights, Some(0), 4), 0);
        assert_eq!(first_visible(&heights, Some(4), 7), 3);
        assert_eq!(first_visible(&heights, Some(2), 20), 0);
    }

    #[test]
    fn test_render_shows_tabs_and_buttons() {
        let mut app = App::default();
        let text = screen_text(&mut app, 200, 40);
        assert!(text.contains("F1 Поиск"));
        assert!(text.contains("F5 Квоты"));
        assert!(text.contains("Готово"));
    }

    #[test]
    fn test_render_shows_pending_label() {
        let mut app = App::default();
        app.pending = Some(crate::app::PendingOperation::new(
            TabId::Search,
            crate::app::OperationKind::Search,
        ));
        let text = screen_text(&mut app, 200, 40);
        assert!(text.contains("Поиск..."));
    }
}
