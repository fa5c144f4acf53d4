//! The simulation context: everything one round (and the process) owns.

use super::config::GameConfig;
use super::evaluator::{award_points, evaluate, GameState};
use super::field::ObstacleField;
use super::player::PlayerBody;
use rand::Rng;

/// What happened during one simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Obstacles cleared this tick.
    pub points: u32,
    /// The round ended on this tick.
    pub ended: bool,
    /// Off-screen obstacles dropped this tick.
    pub pruned: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    pub player: PlayerBody,
    pub field: ObstacleField,
    state: GameState,
    score: u32,
    high_score: u32,
    rounds_played: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let player = PlayerBody::new(&config);
        let field = ObstacleField::new(&config);
        Self {
            config,
            player,
            field,
            state: GameState::Active,
            score: 0,
            high_score: 0,
            rounds_played: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Rounds that have ended since the process started.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Flap if the round is in play. Returns whether the flap was applied.
    pub fn flap(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.player.flap();
        true
    }

    /// Spawn an obstacle if the round is in play. A spawn request during
    /// game over is dropped.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.state.is_active() {
            return false;
        }
        let obstacle = self.field.spawn(rng);
        log::debug!("spawned obstacle with gap at {}", obstacle.gap_center());
        true
    }

    /// Run one tick of physics, collision and scoring. Does nothing once the
    /// round is over.
    pub fn step(&mut self) -> TickOutcome {
        if !self.state.is_active() {
            return TickOutcome::default();
        }

        self.player.apply_gravity();
        self.player.integrate();
        self.field.advance();

        let next_state = evaluate(&self.player, &self.field, &self.config);

        // Points for obstacles cleared this tick count even if it is the last one
        let points = award_points(&self.player, &mut self.field);
        if points > 0 {
            self.score += points;
            log::debug!("cleared {} obstacle(s), score {}", points, self.score);
        }

        let ended = next_state == GameState::GameOver;
        if ended {
            self.state = GameState::GameOver;
            self.rounds_played += 1;
            log::info!("round over with score {}", self.score);
        }

        let pruned = self.field.prune();

        TickOutcome {
            points,
            ended,
            pruned,
        }
    }

    /// Fold the current score into the high score. Called from the game-over
    /// render path, so the high score lags the collision by one render.
    pub fn record_high_score(&mut self) {
        self.high_score = self.high_score.max(self.score);
    }

    /// Start a new round. The high score carries over.
    pub fn restart(&mut self) {
        self.player.reset();
        self.field.clear();
        self.score = 0;
        self.state = GameState::Active;
        log::info!("restarted, high score {}", self.high_score);
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
