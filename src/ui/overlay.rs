//! Text overlays: running score, game-over labels and the restart button.

use super::viewport::Viewport;
use super::{BUTTON_COLOR, TEXT_COLOR};
use crate::core::constants::{
    GAME_OVER_LABEL_Y, HIGH_SCORE_LABEL_Y, RESTART_BUTTON_PAD_X, RESTART_BUTTON_PAD_Y,
    RESTART_BUTTON_Y, SCORE_LABEL_Y,
};
use crate::core::session::Session;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

pub const RESTART_LABEL: &str = "Restart";

/// Running score, centered near the top.
pub fn render_score(frame: &mut Frame, viewport: &Viewport, session: &Session) {
    render_label(
        frame,
        viewport,
        SCORE_LABEL_Y,
        &session.score().to_string(),
    );
}

/// Score, "Game Over!", restart button and high score. Returns the button's
/// cell bounds.
pub fn render_game_over(frame: &mut Frame, viewport: &Viewport, session: &Session) -> Option<Rect> {
    if viewport.is_empty() {
        return None;
    }
    render_label(
        frame,
        viewport,
        SCORE_LABEL_Y,
        &format!("Score: {}", session.score()),
    );
    render_label(
        frame,
        viewport,
        HIGH_SCORE_LABEL_Y,
        &format!("High Score: {}", session.high_score()),
    );
    render_label(frame, viewport, GAME_OVER_LABEL_Y, "Game Over!");

    let bounds = restart_button_bounds(viewport);
    let button = Block::default().style(Style::default().bg(BUTTON_COLOR));
    frame.render_widget(button, bounds);

    let text_row = Rect {
        y: bounds.y + bounds.height / 2,
        height: 1,
        ..bounds
    };
    let label = Paragraph::new(RESTART_LABEL)
        .style(
            Style::default()
                .fg(TEXT_COLOR)
                .bg(BUTTON_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(label, text_row);

    Some(bounds)
}

/// Where the restart button lands: the label centered on its anchor row,
/// grown by the scaled button padding, clipped to the play area.
pub fn restart_button_bounds(viewport: &Viewport) -> Rect {
    let area = viewport.area;
    let pad_x = ((RESTART_BUTTON_PAD_X / 2.0) * viewport.x_scale()).round().max(1.0) as u16;
    let pad_y = ((RESTART_BUTTON_PAD_Y / 2.0) * viewport.y_scale()).round() as u16;

    let label_width = RESTART_LABEL.len() as u16;
    let width = (label_width + 2 * pad_x).min(area.width);
    let height = (1 + 2 * pad_y).min(area.height).max(1);

    let center_row = viewport.row_of(RESTART_BUTTON_Y);
    let top = center_row
        .saturating_sub(pad_y)
        .min(area.height.saturating_sub(height));
    let left = (area.width - width) / 2;

    Rect::new(area.x + left, area.y + top, width, height)
}

fn render_label(frame: &mut Frame, viewport: &Viewport, world_y: f64, text: &str) {
    if viewport.is_empty() {
        return;
    }
    let area = viewport.area;
    let width = (text.chars().count() as u16).min(area.width);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + viewport.row_of(world_y),
        width,
        1,
    );
    // Foreground only, so the label keeps whatever background is under it
    let label = Paragraph::new(text.to_string()).style(
        Style::default()
            .fg(TEXT_COLOR)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(label, rect);
}
