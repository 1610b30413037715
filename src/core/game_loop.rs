//! Frame scheduling and the game session that owns all run state.
//!
//! The host calls [`GameSession::run_frame`] whenever the scheduler says a
//! frame is due: one simulation step, one render, then the next frame is
//! scheduled. At most one frame is ever pending; restarting cancels it and
//! schedules an immediate one in its place.

use crate::core::config::GameConfig;
use crate::core::game_state::{GamePhase, GameState};
use crate::core::tick::{game_tick, TickResult};
use crate::flight;
use crate::player::load_player_name;
use crate::scores::{load_best_scores, record_run, KeyValueStore};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Identifies one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

#[derive(Debug, Clone, Copy)]
struct ScheduledFrame {
    id: FrameId,
    due: Instant,
}

/// Single-slot frame scheduler. Scheduling a frame while one is pending
/// cancels the pending one.
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    pending: Option<ScheduledFrame>,
    next_id: u64,
    cancelled: u64,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            next_id: 0,
            cancelled: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn schedule_at(&mut self, due: Instant) -> FrameId {
        self.cancel();
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending = Some(ScheduledFrame { id, due });
        id
    }

    /// Schedule the frame after the one that just ran.
    pub fn schedule_next(&mut self, now: Instant) -> FrameId {
        self.schedule_at(now + self.interval)
    }

    pub fn schedule_now(&mut self, now: Instant) -> FrameId {
        self.schedule_at(now)
    }

    /// Drop the pending frame, if any.
    pub fn cancel(&mut self) -> Option<FrameId> {
        let frame = self.pending.take()?;
        self.cancelled += 1;
        log::debug!("Cancelled pending frame {:?}", frame.id);
        Some(frame.id)
    }

    pub fn pending(&self) -> Option<FrameId> {
        self.pending.map(|f| f.id)
    }

    /// Frames cancelled over the scheduler's lifetime.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }

    /// How long until the pending frame is due. `None` when nothing is
    /// scheduled; zero when it is already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|f| f.due.saturating_duration_since(now))
    }

    /// Claim the pending frame if it is due.
    pub fn take_due(&mut self, now: Instant) -> Option<FrameId> {
        match self.pending {
            Some(frame) if frame.due <= now => {
                self.pending = None;
                Some(frame.id)
            }
            _ => None,
        }
    }
}

/// What the action input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Jumped,
    Restarted,
}

/// Owns the game state, the persistence store, the RNG and the frame
/// scheduler. All state transitions go through here.
pub struct GameSession<S: KeyValueStore, R: Rng> {
    config: GameConfig,
    state: GameState,
    store: S,
    rng: R,
    scheduler: FrameScheduler,
}

impl<S: KeyValueStore, R: Rng> GameSession<S, R> {
    /// Read the player name and best scores from `store` and start idle.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let player_name = load_player_name(&store);
        let best = load_best_scores(&store, &player_name);
        log::info!(
            "Session for {} (best {}, global best {})",
            player_name,
            best.player,
            best.global
        );
        let state = GameState::new(&config, player_name, best);
        let scheduler = FrameScheduler::new(config.frame_interval());
        Self {
            config,
            state,
            store,
            rng,
            scheduler,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Begin the frame loop (the idle screen still renders every frame).
    pub fn start(&mut self, now: Instant) {
        self.scheduler.schedule_now(now);
    }

    /// The single action input: jump while running, otherwise (re)start.
    pub fn handle_input(&mut self, now: Instant) -> InputOutcome {
        if self.state.phase.awaits_restart() {
            self.restart(now);
            InputOutcome::Restarted
        } else {
            self.jump();
            InputOutcome::Jumped
        }
    }

    /// Takes effect on the next simulated frame. Ignored unless running.
    pub fn jump(&mut self) {
        if self.state.phase.is_running() {
            flight::jump(&mut self.state.plane, &self.config);
        }
    }

    /// Reset the run and replace any pending frame with an immediate one.
    pub fn restart(&mut self, now: Instant) {
        self.scheduler.cancel();
        self.state.reset_run(&self.config);
        log::info!(
            "Run {} started by {}",
            self.state.runs,
            self.state.player_name
        );
        self.scheduler.schedule_now(now);
    }

    /// Advance the simulation one frame and apply any crash.
    pub fn step(&mut self) -> TickResult {
        let result = game_tick(&mut self.state, &self.config, &mut self.rng);
        if let Some(cause) = result.crash {
            log::debug!("Crash: {:?}", cause);
            self.enter_game_over();
        }
        result
    }

    /// Running -> GameOver. Records best scores on the first call of a run;
    /// any later call is a no-op. Returns whether the transition happened.
    pub fn enter_game_over(&mut self) -> bool {
        if !self.state.phase.is_running() {
            return false;
        }
        self.state.phase = GamePhase::GameOver;

        let (update, outcome) = record_run(
            &mut self.store,
            &self.state.player_name,
            self.state.score,
            &mut self.state.best,
        );
        self.state.new_best = update.any();
        if let Err(e) = outcome {
            log::warn!("Failed to save best score: {}", e);
        }

        log::info!(
            "Game over after {} frames: score {}{}",
            self.state.frame_count,
            self.state.score,
            if update.any() { " (new best)" } else { "" }
        );
        true
    }

    /// Run the due frame, if any: step, render, schedule the next one.
    ///
    /// Returns the tick result when a frame ran. A render error leaves no
    /// frame scheduled; the caller is expected to bail out.
    pub fn run_frame<F>(&mut self, now: Instant, render: F) -> io::Result<Option<TickResult>>
    where
        F: FnOnce(&GameState) -> io::Result<()>,
    {
        if self.scheduler.take_due(now).is_none() {
            return Ok(None);
        }
        let result = self.step();
        render(&self.state)?;
        self.scheduler.schedule_next(now);
        Ok(Some(result))
    }

    /// How long the host may wait for input before the next frame is due.
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        self.scheduler
            .time_until_due(now)
            .unwrap_or(self.scheduler.interval())
    }
}
