//! Modal popup rendering: cluster picker and JSON import.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{ClusterPicker, ImportFocus, JsonImportPopup, Popup};
use crate::ui::theme::Theme;

/// Render the open popup over the whole frame.
pub fn render_popup(f: &mut Frame, popup: &mut Popup, theme: &Theme) {
    match popup {
        Popup::ClusterPicker(picker) => {
            let area = centered_rect(80, 60, f.area());
            f.render_widget(Clear, area);
            render_cluster_picker(f, area, picker, theme);
        }
        Popup::JsonImport(dialog) => {
            let area = centered_rect(80, 80, f.area());
            f.render_widget(Clear, area);
            render_json_import(f, area, dialog, theme);
        }
    }
}

fn render_cluster_picker(f: &mut Frame, area: Rect, picker: &mut ClusterPicker, theme: &Theme) {
    let block = Block::default()
        .title("Выберите кластер (Enter - выбрать, Esc - отмена)")
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let items: Vec<ListItem> = picker
        .clusters
        .iter()
        .map(|c| ListItem::new(c.display_label()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::RIGHT).border_style(theme.border()))
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");
    f.render_stateful_widget(list, columns[0], &mut picker.state);

    let details: Vec<Line> = match picker.selected() {
        Some(cluster) => cluster
            .attributes()
            .into_iter()
            .map(|(name, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{name}: "),
                        theme.text_dim().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(value.to_string(), theme.text()),
                ])
            })
            .collect(),
        None => vec![Line::from(Span::styled("Нет кластеров", theme.text_dim()))],
    };
    f.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: false }),
        columns[1],
    );
}

fn render_json_import(f: &mut Frame, area: Rect, dialog: &JsonImportPopup, theme: &Theme) {
    let block = Block::default()
        .title("Импорт JSON")
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let pane = |title: &'static str, focused: bool| {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(if focused {
                theme.border_focused()
            } else {
                theme.border()
            })
    };

    let ticket_block = pane("JSON заявки", dialog.focus == ImportFocus::Ticket);
    let ticket_inner = ticket_block.inner(rows[0]);
    f.render_widget(ticket_block, rows[0]);
    f.render_widget(&dialog.ticket, ticket_inner);

    let params_block = pane("JSON параметров", dialog.focus == ImportFocus::Params);
    let params_inner = params_block.inner(rows[1]);
    f.render_widget(params_block, rows[1]);
    f.render_widget(&dialog.params, params_inner);

    f.render_widget(
        Paragraph::new("Tab - переключить поле | Ctrl+S - импортировать | Esc - закрыть")
            .style(theme.text_dim()),
        rows[2],
    );
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
