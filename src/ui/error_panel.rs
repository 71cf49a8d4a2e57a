//! Developer error panel overlay.

use super::game_common::{centered_rect, render_status_bar};
use crate::core::constants::ERROR_PANEL_LIMIT;
use crate::diagnostics::ErrorLog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_error_panel(frame: &mut Frame, area: Rect, log: &ErrorLog, status: Option<&str>) {
    let panel = centered_rect(area, area.width.saturating_sub(8).max(40), area.height.saturating_sub(4));
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(format!(" Errors ({}) ", log.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    let mut lines = Vec::new();
    if log.is_empty() {
        lines.push(Line::from(Span::styled(
            "No errors recorded",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for entry in log.entries(ERROR_PANEL_LIMIT) {
        lines.push(Line::from(vec![
            Span::styled(
                entry.timestamp.format("%H:%M:%S ").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{}::{} ", entry.component, entry.action),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                entry.message.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for cause in &entry.causes {
            lines.push(Line::from(Span::styled(
                format!("    caused by: {}", cause),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    render_status_bar(
        frame,
        chunks[1],
        status.unwrap_or(""),
        Color::Yellow,
        &[("[C]", "Clear"), ("[X]", "Export"), ("[Esc/F2]", "Close")],
    );
}
