//! Game screen: session header, current minigame and answer banner.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_result_banner, render_status_bar,
};
use super::minigame_scene::{render_color_hop, render_math_quiz};
use crate::app::GameScreen;
use crate::challenges::ActiveMinigame;
use crate::core::player_state::xp_threshold;
use crate::core::SessionPhase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

pub fn render_game(frame: &mut Frame, area: Rect, game: &GameScreen) {
    let title = match game.category() {
        Some(category) => format!(" {} ", category.name()),
        None => " Game ".to_string(),
    };
    let layout = create_game_layout(frame, area, &title, Color::Magenta, 10, 24);

    match &game.minigame {
        Some(ActiveMinigame::ColorHop(hop)) => render_color_hop(frame, layout.content, hop),
        Some(ActiveMinigame::MathQuiz(quiz)) => render_math_quiz(frame, layout.content, quiz),
        None => render_missing_minigame(frame, layout.content, game),
    }

    if game.showing_result() {
        if let Some(result) = &game.last_result {
            render_result_banner(frame, layout.content, result);
        }
    }

    let status = match game.session.phase() {
        SessionPhase::Resolving { .. } => "Next task coming up...",
        _ if game.minigame.as_ref().is_some_and(|m| m.round().is_locked()) => "Hop!",
        _ => "Choose an answer",
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        Color::Yellow,
        &[("[←→]", "Move"), ("[Enter/1-5]", "Pick"), ("[Esc]", "Back")],
    );

    render_info_panel(frame, layout.info_panel, game);
}

fn render_missing_minigame(frame: &mut Frame, area: Rect, game: &GameScreen) {
    let task = game
        .current_task()
        .map(|t| t.template_id.clone())
        .unwrap_or_default();
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No mini-game for this task yet",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(task, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GameScreen) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 4 {
        return;
    }

    let player = game.session.player();
    let correct = player.history().iter().filter(|h| h.correct).count();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Level ", Style::default().fg(Color::Gray)),
            Span::styled(
                player.level().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("XP    ", Style::default().fg(Color::Gray)),
            Span::styled(player.xp().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Score ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", correct, player.history().len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];
    for capability in player.capabilities() {
        lines.push(Line::from(Span::styled(
            format!("✓ {}", capability),
            Style::default().fg(Color::Cyan),
        )));
    }
    let text_height = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines), inner);

    // Progress from the previous threshold to the next one.
    let floor = xp_threshold(player.level().saturating_sub(1));
    let span = xp_threshold(player.level()).saturating_sub(floor).max(1);
    let ratio = (player.xp().saturating_sub(floor) as f64 / span as f64).clamp(0.0, 1.0);
    if inner.height > text_height + 1 {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(ratio)
            .label(format!("{} to next", player.xp_to_next_level()));
        frame.render_widget(
            gauge,
            Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            },
        );
    }
}
