//! Flappy - terminal Flappy Bird
//!
//! This module exposes the simulation, input dispatch and rendering for
//! testing and for the binary.

pub mod app;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;

pub use app::{App, LoopControl};
pub use core::config::{ConfigError, GameConfig};
pub use core::evaluator::GameState;
pub use core::session::Session;
pub use error::GameError;
pub use input::GameEvent;
