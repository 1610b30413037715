//! One simulation step.
//!
//! `game_tick()` advances physics, spawning, scoring and culling for a single
//! frame and reports what happened. It never changes the game phase: a crash
//! is returned as [`TickResult::crash`] and the session decides what that
//! means for the run.

use crate::core::config::GameConfig;
use crate::core::game_state::GameState;
use crate::flight::{check_obstacles, should_spawn, spawn_obstacle, update_obstacle, update_plane};
use rand::Rng;

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Ground,
    Pipe,
}

/// A single event produced during a tick, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// A new obstacle entered at the right edge.
    ObstacleSpawned { top_height: f64 },
    /// The plane bumped the ceiling and was clamped.
    CeilingBump,
    /// An obstacle was passed. `score` is the total after the increment.
    Scored { score: u32 },
    /// Obstacles that left the screen this frame.
    ObstaclesCulled { count: usize },
    Crashed { cause: CrashCause },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// Set when the plane hit the ground or a pipe this frame.
    pub crash: Option<CrashCause>,
}

impl TickResult {
    fn crashed(mut self, cause: CrashCause) -> Self {
        self.events.push(TickEvent::Crashed { cause });
        self.crash = Some(cause);
        self
    }

    pub fn points(&self) -> u32 {
        self.events
            .iter()
            .filter(|e| matches!(e, TickEvent::Scored { .. }))
            .count() as u32
    }
}

/// Advance a running game by one frame. Does nothing unless the phase is
/// `Running`.
pub fn game_tick<R: Rng>(state: &mut GameState, config: &GameConfig, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if !state.phase.is_running() {
        return result;
    }

    // ── 1. Plane physics ───────────────────────────────────────
    let status = update_plane(&mut state.plane, config);
    if status.hit_ceiling {
        result.events.push(TickEvent::CeilingBump);
    }
    if status.hit_ground {
        return result.crashed(CrashCause::Ground);
    }

    // ── 2. Spawning ────────────────────────────────────────────
    if should_spawn(state.frame_count, config) {
        let obstacle = spawn_obstacle(rng, config);
        result.events.push(TickEvent::ObstacleSpawned {
            top_height: obstacle.top_height,
        });
        state.obstacles.push(obstacle);
    }
    state.frame_count += 1;

    // ── 3. Scroll ──────────────────────────────────────────────
    for obstacle in &mut state.obstacles {
        update_obstacle(obstacle, config);
    }

    // ── 4. Collision and scoring ───────────────────────────────
    let report = check_obstacles(&state.plane, &mut state.obstacles);
    for _ in 0..report.points {
        state.score += 1;
        result.events.push(TickEvent::Scored { score: state.score });
    }

    // ── 5. Cull ────────────────────────────────────────────────
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_off_screen());
    let culled = before - state.obstacles.len();
    if culled > 0 {
        result.events.push(TickEvent::ObstaclesCulled { count: culled });
    }

    if report.crashed {
        return result.crashed(CrashCause::Pipe);
    }
    result
}
