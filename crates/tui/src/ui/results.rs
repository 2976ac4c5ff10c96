//! Drawing of the result area.
//!
//! Sections become styled lines; tables are laid out as padded columns so
//! the whole area scrolls as one paragraph.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::results::{BannerTone, COPIED_LABEL, COPY_LABEL, ResultView, Section};
use crate::ui::theme::Theme;

const COLUMN_GAP: &str = "  ";

/// Styled lines of every section, separated by a blank line.
pub fn result_lines(view: &ResultView, theme: &Theme, copied: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in &view.sections {
        match section {
            Section::Table {
                title, header, rows, ..
            } => {
                lines.push(Line::from(Span::styled(title.clone(), theme.title())));
                lines.extend(table_lines(header, rows, theme));
            }
            Section::Text { title, body } => {
                if let Some(title) = title {
                    lines.push(Line::from(Span::styled(title.clone(), theme.title())));
                }
                lines.extend(body.split('\n').map(|l| Line::from(l.to_string())));
            }
            Section::Banner { tone, title, text } => {
                let style = match tone {
                    BannerTone::Info => theme.info(),
                    BannerTone::Warning => theme.warning(),
                };
                lines.push(Line::from(Span::styled(
                    title.clone(),
                    style.add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(text.clone(), style)));
            }
            Section::Commands {
                title,
                text,
                copyable,
            } => {
                let mut heading = vec![Span::styled(title.clone(), theme.title())];
                if *copyable {
                    let label = if copied { COPIED_LABEL } else { COPY_LABEL };
                    heading.push(Span::raw("  "));
                    heading.push(Span::styled(format!("[{label}: Ctrl+Y]"), theme.info()));
                }
                lines.push(Line::from(heading));
                lines.extend(
                    text.split('\n')
                        .map(|l| Line::from(Span::styled(l.to_string(), theme.text_dim()))),
                );
            }
            Section::Errors { title, items } => {
                lines.push(Line::from(Span::styled(
                    title.clone(),
                    theme.error().add_modifier(Modifier::BOLD),
                )));
                lines.extend(
                    items
                        .iter()
                        .map(|item| Line::from(Span::styled(item.clone(), theme.error()))),
                );
            }
            Section::Failure(message) => {
                lines.extend(
                    message
                        .split('\n')
                        .map(|l| Line::from(Span::styled(l.to_string(), theme.error()))),
                );
            }
        }
        lines.push(Line::default());
    }
    lines
}

fn table_lines(header: &[String], rows: &[Vec<String>], theme: &Theme) -> Vec<Line<'static>> {
    let mut widths: Vec<usize> = header.iter().map(|h| Span::raw(h.as_str()).width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = Span::raw(cell.as_str()).width();
            match widths.get_mut(i) {
                Some(max) => *max = (*max).max(w),
                None => widths.push(w),
            }
        }
    }

    let render_row = |cells: &[String], style: Style| -> Line<'static> {
        let spans: Vec<Span<'static>> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths.get(i).copied().unwrap_or(0);
                Span::styled(pad_cell(cell, pad), style)
            })
            .collect();
        Line::from(spans)
    };

    let mut lines = vec![render_row(header, theme.table_header())];
    lines.extend(rows.iter().map(|row| render_row(row, theme.text())));
    lines
}

fn pad_cell(cell: &str, width: usize) -> String {
    let used = Span::raw(cell).width();
    format!("{cell}{}{COLUMN_GAP}", " ".repeat(width.saturating_sub(used)))
}

/// Draw the result area with vertical scroll.
pub fn render_results(
    f: &mut Frame,
    area: Rect,
    view: &ResultView,
    scroll: u16,
    copied: bool,
    theme: &Theme,
) {
    let lines = result_lines(view, theme, copied);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Результат")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}
