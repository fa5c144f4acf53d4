//! Shared layout pieces: outer frame and status bar.

use crate::core::evaluator::GameState;
use crate::core::session::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, inside the outer border
    pub content: Rect,
    /// Status bar area (2 lines) below the play field
    pub status_bar: Rect,
}

/// Create the game layout with an outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │                                 │
/// │   [content area]                │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
    }
}

const ACTIVE_CONTROLS: [(&str, &str); 2] = [("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")];
const GAME_OVER_CONTROLS: [(&str, &str); 3] = [
    ("[Space/Up/Enter]", "Restart"),
    ("[Click]", "Restart"),
    ("[Esc/Q]", "Quit"),
];

/// Two-line status bar: round status on top, key hints below. Text, colour
/// and hints follow the session state.
pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    if area.height < 1 {
        return;
    }

    let (status, color, controls): (String, Color, &[(&str, &str)]) = match session.state() {
        GameState::Active => (
            format!(
                "Score: {}   High Score: {}",
                session.score(),
                session.high_score()
            ),
            Color::Green,
            &ACTIVE_CONTROLS[..],
        ),
        GameState::GameOver => (
            format!("Crashed with {}! Press Space or click Restart", session.score()),
            Color::Yellow,
            &GAME_OVER_CONTROLS[..],
        ),
    };

    let status_line = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(color)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}
