//! Terminal rendering for every screen.

pub mod error_panel;
pub mod game_common;
pub mod game_screen;
pub mod game_selection;
pub mod minigame_scene;

use crate::app::{App, Screen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the whole app for one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.size();

    match &app.screen {
        Screen::Selection => game_selection::render_selection(frame, size, app),
        Screen::Game(game) => game_screen::render_game(frame, size, game),
    }

    if app.show_errors {
        let log = app.error_log().borrow();
        error_panel::render_error_panel(frame, size, &log, app.status.as_deref());
    } else if app.unseen_errors() > 0 {
        draw_error_badge(frame, size, app.unseen_errors());
    }
}

/// Small "new errors" marker in the top-right corner.
fn draw_error_badge(frame: &mut Frame, area: Rect, count: usize) {
    let text = format!(" ⚠ {} ", count);
    let width = (text.chars().count() as u16).min(area.width);
    let badge = Paragraph::new(text)
        .style(Style::default().fg(Color::Black).bg(Color::Red))
        .alignment(Alignment::Right);
    frame.render_widget(
        badge,
        Rect::new(area.x + area.width - width, area.y, width, 1.min(area.height)),
    );
}
