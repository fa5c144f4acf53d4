//! Obstacle pairs and the factory that places them at the right edge.

use super::config::GameConfig;
use super::geometry::WorldRect;
use rand::Rng;

/// One pipe pair: a blocker from the top of the field down to the gap and a
/// blocker from the gap down to the bottom of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub upper: WorldRect,
    pub lower: WorldRect,
    /// Set once the player's left edge has passed this pair.
    pub scored: bool,
}

impl Obstacle {
    /// Build a pair at horizontal position `x` around `gap_center`.
    pub fn new(x: f64, width: f64, gap_center: f64, gap: f64, field_height: f64) -> Self {
        let gap_top = gap_center - gap / 2.0;
        let gap_bottom = gap_center + gap / 2.0;
        Self {
            upper: WorldRect::new(x, 0.0, width, gap_top),
            lower: WorldRect::new(x, gap_bottom, width, field_height - gap_bottom),
            scored: false,
        }
    }

    pub fn left(&self) -> f64 {
        self.upper.left()
    }

    pub fn right(&self) -> f64 {
        self.upper.right()
    }

    /// Vertical clearance between the two blockers.
    pub fn gap_height(&self) -> f64 {
        self.lower.top() - self.upper.bottom()
    }

    pub fn gap_center(&self) -> f64 {
        (self.upper.bottom() + self.lower.top()) / 2.0
    }

    pub fn shift_x(&mut self, dx: f64) {
        self.upper.shift_x(dx);
        self.lower.shift_x(dx);
    }

    pub fn intersects(&self, rect: &WorldRect) -> bool {
        rect.intersects(&self.upper) || rect.intersects(&self.lower)
    }
}

/// Produces obstacles at the right edge with a gap center drawn uniformly
/// from a fixed set.
#[derive(Debug, Clone)]
pub struct ObstacleFactory {
    spawn_x: f64,
    width: f64,
    gap: f64,
    field_height: f64,
    gap_centers: Vec<f64>,
}

impl ObstacleFactory {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            spawn_x: config.field_width,
            width: config.pipe_width,
            gap: config.pipe_gap,
            field_height: config.field_height,
            gap_centers: config.gap_centers.clone(),
        }
    }

    pub fn create<R: Rng>(&self, rng: &mut R) -> Obstacle {
        let gap_center = if self.gap_centers.is_empty() {
            self.field_height / 2.0
        } else {
            self.gap_centers[rng.gen_range(0..self.gap_centers.len())]
        };
        Obstacle::new(
            self.spawn_x,
            self.width,
            gap_center,
            self.gap,
            self.field_height,
        )
    }
}
