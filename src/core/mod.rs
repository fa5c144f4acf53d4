//! Core simulation: player, obstacles, collisions, scoring and clocks.

pub mod config;
pub mod constants;
pub mod evaluator;
pub mod field;
pub mod geometry;
pub mod obstacle;
pub mod player;
pub mod session;
pub mod timer;

pub use config::{ConfigError, GameConfig};
pub use constants::*;
pub use evaluator::{award_points, evaluate, GameState};
pub use field::ObstacleField;
pub use geometry::WorldRect;
pub use obstacle::{Obstacle, ObstacleFactory};
pub use player::PlayerBody;
pub use session::{Session, TickOutcome};
pub use timer::{FrameClock, SpawnTimer};
