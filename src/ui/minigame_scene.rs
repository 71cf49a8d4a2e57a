//! Rendering for the choice-based minigames.

use crate::challenges::{ChoiceRound, ColorHopGame, MathQuizGame};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split `area` into a prompt line, the hopping ball and a row of options.
fn scene_rows(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(area);
    (rows[0], rows[1], rows[2])
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let text = Paragraph::new(Line::from(Span::styled(
        prompt.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Border color of option `index`: cursor, picked-right, picked-wrong or idle.
fn option_border(round: &ChoiceRound, index: usize) -> Color {
    match round.chosen() {
        Some((chosen, correct)) if chosen == index => {
            super::game_common::result_color(correct)
        }
        Some(_) => Color::DarkGray,
        None if round.cursor == index => Color::White,
        None => Color::DarkGray,
    }
}

fn option_areas(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = vec![Constraint::Ratio(1, count.max(1) as u32); count];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

pub fn render_color_hop(frame: &mut Frame, area: Rect, game: &ColorHopGame) {
    let (prompt_area, ball_area, platforms_area) = scene_rows(area);
    render_prompt(frame, prompt_area, &game.prompt());

    // The ball stays gray with a "?" until a platform is picked.
    let (ball_text, ball_color, ball_row) = match game.round.chosen() {
        None => ("( ? )", Color::Gray, 0),
        Some((_, true)) => {
            let (r, g, b) = game.target.rgb;
            ("(   )", Color::Rgb(r, g, b), ball_area.height.saturating_sub(1))
        }
        Some((_, false)) => ("  ·  ", Color::DarkGray, 0),
    };
    let ball = Paragraph::new(Span::styled(
        ball_text,
        Style::default()
            .fg(ball_color)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(
        ball,
        Rect {
            y: ball_area.y + ball_row,
            height: 1,
            ..ball_area
        },
    );

    for (i, (color, slot)) in game
        .platforms
        .iter()
        .zip(option_areas(platforms_area, game.platforms.len()))
        .enumerate()
    {
        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(option_border(&game.round, i)));
        let inner = block.inner(slot);
        frame.render_widget(block, slot);

        let (r, g, b) = color.rgb;
        let fill = Paragraph::new(vec![Line::from(""); inner.height as usize])
            .style(Style::default().bg(Color::Rgb(r, g, b)));
        frame.render_widget(fill, inner);
    }
}

pub fn render_math_quiz(frame: &mut Frame, area: Rect, game: &MathQuizGame) {
    let (prompt_area, _, answers_area) = scene_rows(area);
    render_prompt(frame, prompt_area, &game.prompt());

    for (i, (answer, slot)) in game
        .answers
        .iter()
        .zip(option_areas(answers_area, game.answers.len()))
        .enumerate()
    {
        let border = option_border(&game.round, i);
        let block = Block::default()
            .title(format!(" {} ", i + 1))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(slot);
        frame.render_widget(block, slot);

        let text = Paragraph::new(Span::styled(
            answer.to_string(),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            text,
            Rect {
                y: inner.y + inner.height / 2,
                height: 1.min(inner.height),
                ..inner
            },
        );
    }
}
