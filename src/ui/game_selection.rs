//! Game selection screen.

use crate::app::{App, GAMES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_selection(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Game cards
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "DreamForge",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Pick a game and start playing!",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let card_constraints = vec![Constraint::Length(4); GAMES.len()];
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(card_constraints)
        .split(chunks[1]);

    for (i, (game, card_area)) in GAMES.iter().zip(cards.iter()).enumerate() {
        let selected = i == app.selected_index;
        let border_color = if selected { Color::Magenta } else { Color::DarkGray };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(*card_area);
        frame.render_widget(block, *card_area);

        let mut name_style = Style::default().fg(Color::White);
        if selected {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", game.icon), Style::default().fg(Color::Yellow)),
                Span::styled(game.category.name(), name_style),
            ]),
            Line::from(Span::styled(
                game.description,
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }

    super::game_common::render_status_bar(
        frame,
        chunks[2],
        app.status.as_deref().unwrap_or(""),
        Color::Yellow,
        &[
            ("[↑↓]", "Choose"),
            ("[Enter]", "Play"),
            ("[F2]", "Errors"),
            ("[Q]", "Quit"),
        ],
    );
}
