//! Terminal presentation. Reads the session, never changes it.

pub mod game_common;
pub mod overlay;
pub mod play_field;
pub mod viewport;

use crate::core::session::Session;
use game_common::{create_game_layout, render_status_bar};
use ratatui::{layout::Rect, style::Color, Frame};
use viewport::Viewport;

pub const SKY_COLOR: Color = Color::Rgb(135, 206, 235);
pub const BIRD_COLOR: Color = Color::Rgb(255, 255, 0);
pub const PIPE_COLOR: Color = Color::Rgb(0, 128, 0);
pub const TEXT_COLOR: Color = Color::Rgb(255, 255, 255);
pub const FLOOR_COLOR: Color = Color::Rgb(222, 184, 135);
pub const BUTTON_COLOR: Color = Color::Rgb(255, 100, 0);

/// Draw one frame. Returns the restart button bounds when the game-over view
/// was drawn, `None` otherwise.
pub fn draw(frame: &mut Frame, session: &Session) -> Option<Rect> {
    let area = frame.size();
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan);
    let config = session.config();
    let viewport = Viewport::new(layout.content, config.field_width, config.field_height);

    play_field::render_scene(frame, &viewport, session);

    let restart_bounds = if session.is_active() {
        overlay::render_score(frame, &viewport, session);
        None
    } else {
        overlay::render_game_over(frame, &viewport, session)
    };
    render_status_bar(frame, layout.status_bar, session);

    play_field::render_floor(frame, &viewport, config.floor_y);

    restart_bounds
}
