//! Input handling: terminal events become game events, game events are
//! applied to the session.

use crate::core::session::Session;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::Rng;
use ratatui::layout::Rect;

/// Everything the loop reacts to, from the terminal or the spawn timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Leave the game.
    Quit,
    /// Flap while playing, restart after game over (Space, Up or Enter).
    Flap,
    /// Left button pressed at a terminal cell.
    PointerDown { column: u16, row: u16 },
    /// The spawn timer elapsed.
    SpawnObstacle,
}

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Restarted,
    Quit,
}

/// Translate a terminal event. Returns `None` for anything the game ignores.
pub fn map_terminal_event(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<GameEvent> {
    // Some terminals report releases; holding a key still repeats flaps
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameEvent::Flap),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Option<GameEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameEvent::PointerDown {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Whether a terminal cell lies inside `rect`.
pub fn cell_in_rect(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Apply one event to the session.
///
/// `restart_bounds` is the restart button as last drawn on the game-over
/// screen, if any.
pub fn dispatch<R: Rng>(
    event: GameEvent,
    session: &mut Session,
    restart_bounds: Option<Rect>,
    rng: &mut R,
) -> InputResult {
    match event {
        GameEvent::Quit => InputResult::Quit,
        GameEvent::Flap => {
            if session.is_active() {
                session.flap();
                InputResult::Continue
            } else {
                session.restart();
                InputResult::Restarted
            }
        }
        GameEvent::PointerDown { column, row } => {
            if session.is_active() {
                return InputResult::Continue;
            }
            match restart_bounds {
                Some(bounds) if cell_in_rect(bounds, column, row) => {
                    session.restart();
                    InputResult::Restarted
                }
                _ => {
                    log::warn!("click at ({}, {}) missed the restart button", column, row);
                    InputResult::Continue
                }
            }
        }
        GameEvent::SpawnObstacle => {
            session.spawn_obstacle(rng);
            InputResult::Continue
        }
    }
}
