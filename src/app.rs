//! The game loop: collects events, applies them, steps the simulation and
//! draws, at a fixed tick rate.

use crate::core::config::GameConfig;
use crate::core::session::Session;
use crate::core::timer::{FrameClock, SpawnTimer};
use crate::error::Result;
use crate::input::{dispatch, map_terminal_event, GameEvent, InputResult};
use crate::ui;
use crossterm::event::{self, Event};
use rand::Rng;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::collections::VecDeque;
use std::time::Duration;

/// Whether the loop keeps going after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct App<R: Rng> {
    session: Session,
    rng: R,
    spawn_timer: SpawnTimer,
    pending: VecDeque<GameEvent>,
    /// Restart button as drawn by the most recent game-over render.
    restart_bounds: Option<Rect>,
    ticks: u64,
}

impl<R: Rng> App<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let spawn_timer = SpawnTimer::new(config.spawn_interval());
        Self {
            session: Session::new(config),
            rng,
            spawn_timer,
            pending: VecDeque::new(),
            restart_bounds: None,
            ticks: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn restart_bounds(&self) -> Option<Rect> {
        self.restart_bounds
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Queue a terminal event if the game cares about it.
    pub fn handle_terminal_event(&mut self, event: &Event) {
        if let Some(event) = map_terminal_event(event) {
            self.push_event(event);
        }
    }

    /// Feed real elapsed time to the spawn timer, queueing one spawn request
    /// per completed period.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        for _ in 0..self.spawn_timer.advance(elapsed) {
            self.pending.push_back(GameEvent::SpawnObstacle);
        }
    }

    /// Drain queued events, then run one simulation tick if the round is in
    /// play.
    pub fn update(&mut self) -> LoopControl {
        while let Some(event) = self.pending.pop_front() {
            let result = dispatch(
                event,
                &mut self.session,
                self.restart_bounds,
                &mut self.rng,
            );
            match result {
                InputResult::Quit => {
                    log::info!("quit after {} ticks", self.ticks);
                    return LoopControl::Quit;
                }
                InputResult::Restarted => self.restart_bounds = None,
                InputResult::Continue => {}
            }
        }

        let outcome = self.session.step();
        if outcome.pruned > 0 {
            log::debug!("pruned {} off-screen obstacle(s)", outcome.pruned);
        }
        self.ticks += 1;
        LoopControl::Continue
    }

    /// One loop iteration without the wait: clock, events, simulation.
    pub fn tick(&mut self, elapsed: Duration) -> LoopControl {
        self.advance_clock(elapsed);
        self.update()
    }

    /// Draw the current view. The game-over view first folds the score into
    /// the high score, then publishes the restart button bounds.
    pub fn present<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        if !self.session.is_active() {
            self.session.record_high_score();
        }
        let session = &self.session;
        let mut bounds = None;
        terminal.draw(|frame| {
            bounds = ui::draw(frame, session);
        })?;
        self.restart_bounds = bounds;
        Ok(())
    }

    /// Run until the player quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut clock = FrameClock::new(self.session.config().frame_duration());
        log::info!(
            "starting loop at {} Hz, spawning every {:?}",
            self.session.config().frame_rate_hz,
            self.spawn_timer.period()
        );

        loop {
            clock.begin_frame();
            let elapsed = clock.take_elapsed();
            if self.tick(elapsed) == LoopControl::Quit {
                return Ok(());
            }
            self.present(terminal)?;

            // Collect input for the rest of the frame
            while event::poll(clock.remaining())? {
                let event = event::read()?;
                self.handle_terminal_event(&event);
            }
        }
    }
}
