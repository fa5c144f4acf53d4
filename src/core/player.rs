//! The player-controlled body: a fixed-column hitbox under constant gravity.

use super::config::GameConfig;
use super::geometry::WorldRect;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    /// Fixed horizontal position of the left edge.
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical center in world units (positive = downward).
    pub center_y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    gravity: f64,
    flap_impulse: f64,
    initial_center_y: f64,
}

impl PlayerBody {
    /// The body starts with its top edge at half the field height, at rest.
    pub fn new(config: &GameConfig) -> Self {
        let initial_center_y = (config.field_height / 2.0).floor() + config.player_height / 2.0;
        Self {
            x: config.player_x,
            width: config.player_width,
            height: config.player_height,
            center_y: initial_center_y,
            velocity: 0.0,
            gravity: config.gravity,
            flap_impulse: config.flap_impulse,
            initial_center_y,
        }
    }

    pub fn apply_gravity(&mut self) {
        self.velocity += self.gravity;
    }

    /// Override the velocity with the flap impulse. Not additive: repeated
    /// flaps within one tick leave the same velocity.
    pub fn flap(&mut self) {
        self.velocity = self.flap_impulse;
    }

    pub fn integrate(&mut self) {
        self.center_y += self.velocity;
    }

    pub fn reset(&mut self) {
        self.center_y = self.initial_center_y;
        self.velocity = 0.0;
    }

    pub fn initial_center_y(&self) -> f64 {
        self.initial_center_y
    }

    pub fn rect(&self) -> WorldRect {
        WorldRect::new(
            self.x,
            self.center_y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}
