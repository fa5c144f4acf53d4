//! Tuning parameters for the simulation and the loop.
//!
//! Defaults are the reference values from [`crate::core::constants`]. A JSON
//! file may override any subset of fields; missing fields keep their default.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    /// Top of the floor band; the player's bottom edge reaching it ends the round.
    pub floor_y: f64,
    /// The player's top edge at or above this ends the round.
    pub ceiling_limit: f64,

    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub gravity: f64,
    pub flap_impulse: f64,

    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_speed: f64,
    pub gap_centers: Vec<f64>,

    pub spawn_interval_ms: u64,
    pub frame_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            floor_y: FLOOR_Y,
            ceiling_limit: CEILING_LIMIT,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            gap_centers: GAP_CENTERS.to_vec(),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            frame_rate_hz: FRAME_RATE_HZ,
        }
    }
}

impl GameConfig {
    /// Layer the sources: defaults, then `file`, then the `fps` override.
    /// Only the merged result is validated.
    pub fn resolve(file: Option<&Path>, fps: Option<u32>) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::read(path)?,
            None => Self::default(),
        };
        if let Some(fps) = fps {
            config.frame_rate_hz = fps;
        }
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> String {
        // A plain struct of numbers and a Vec<f64> always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return invalid(format!(
                "field must have positive size, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if !(self.floor_y > 0.0 && self.floor_y <= self.field_height) {
            return invalid(format!(
                "floor_y {} must lie inside the field (0, {}]",
                self.floor_y, self.field_height
            ));
        }
        if !(self.player_width > 0.0 && self.player_height > 0.0) {
            return invalid("player extent must be positive".to_string());
        }
        // Pruning happens at x=0, so the player must sit right of it
        if !(self.player_x >= 0.0 && self.player_x + self.player_width <= self.field_width) {
            return invalid(format!(
                "player at x={} with width {} must lie inside [0, {}]",
                self.player_x, self.player_width, self.field_width
            ));
        }
        if !(self.pipe_width > 0.0) {
            return invalid(format!("pipe_width must be positive, got {}", self.pipe_width));
        }
        if !(self.pipe_gap > 0.0) {
            return invalid(format!("pipe_gap must be positive, got {}", self.pipe_gap));
        }
        if !(self.pipe_speed > 0.0) {
            return invalid(format!("pipe_speed must be positive, got {}", self.pipe_speed));
        }
        if self.gap_centers.is_empty() {
            return invalid("gap_centers must not be empty".to_string());
        }
        let half_gap = self.pipe_gap / 2.0;
        for &center in &self.gap_centers {
            if center - half_gap < 0.0 || center + half_gap > self.field_height {
                return invalid(format!(
                    "gap centered at {} with gap {} does not fit in height {}",
                    center, self.pipe_gap, self.field_height
                ));
            }
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms must be positive".to_string());
        }
        if !(1..=1000).contains(&self.frame_rate_hz) {
            return invalid(format!(
                "frame_rate_hz must be within 1..=1000, got {}",
                self.frame_rate_hz
            ));
        }
        Ok(())
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate_hz.max(1) as f64)
    }
}
