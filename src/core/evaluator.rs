//! Collision detection and scoring.

use super::config::GameConfig;
use super::field::ObstacleField;
use super::player::PlayerBody;

/// Whether a round is still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Active,
    GameOver,
}

impl GameState {
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Active)
    }
}

/// Decide whether the round continues.
///
/// The round ends when the player's rectangle overlaps either region of any
/// obstacle, when its top edge reaches the ceiling limit, or when its bottom
/// edge reaches the floor line.
pub fn evaluate(player: &PlayerBody, field: &ObstacleField, config: &GameConfig) -> GameState {
    let rect = player.rect();

    if field.iter().any(|obstacle| obstacle.intersects(&rect)) {
        return GameState::GameOver;
    }

    if rect.top() <= config.ceiling_limit || rect.bottom() >= config.floor_y {
        return GameState::GameOver;
    }

    GameState::Active
}

/// Mark every obstacle the player has fully cleared and return the number of
/// newly cleared ones. Each obstacle pays out at most once.
pub fn award_points(player: &PlayerBody, field: &mut ObstacleField) -> u32 {
    let player_left = player.rect().left();
    let mut points = 0;
    for obstacle in field.iter_mut() {
        if !obstacle.scored && obstacle.upper.right() < player_left {
            obstacle.scored = true;
            points += 1;
        }
    }
    points
}
