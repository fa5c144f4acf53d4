//! Fatal startup and terminal errors.
//!
//! Gameplay never fails: a collision is a state transition. Everything here
//! ends the process with a non-zero status.

use crate::core::config::ConfigError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
