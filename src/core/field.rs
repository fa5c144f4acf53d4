//! The ordered collection of active obstacles.

use super::config::GameConfig;
use super::obstacle::{Obstacle, ObstacleFactory};
use rand::Rng;

/// Obstacles in spawn order, which is also left-to-right screen order.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    factory: ObstacleFactory,
    speed: f64,
}

impl ObstacleField {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            obstacles: Vec::new(),
            factory: ObstacleFactory::new(config),
            speed: config.pipe_speed,
        }
    }

    /// Append one freshly created obstacle at the right edge.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> &Obstacle {
        let obstacle = self.factory.create(rng);
        self.obstacles.push(obstacle);
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Append an already built obstacle.
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Move every obstacle left by the pipe speed.
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.shift_x(-self.speed);
        }
    }

    /// Drop obstacles that are entirely left of the screen. Returns how many
    /// were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right() > 0.0);
        before - self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
