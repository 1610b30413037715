//! Run lifecycle and the state a frame reads and mutates.
//!
//! Phase transitions happen in the session, never in the tick.

use crate::core::config::GameConfig;
use crate::flight::{Obstacle, Plane};
use crate::scores::BestScores;

/// Where the game is in its run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Before the first run. Rendered like game over, with a title instead.
    #[default]
    Idle,
    Running,
    GameOver,
}

impl GamePhase {
    /// Only a running game advances physics and collision.
    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }

    /// The action input restarts rather than jumps.
    pub fn awaits_restart(self) -> bool {
        matches!(self, GamePhase::Idle | GamePhase::GameOver)
    }
}

/// Everything the renderer needs to draw a frame.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub plane: Plane,
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub best: BestScores,
    /// Frames simulated in the current run.
    pub frame_count: u64,
    pub player_name: String,
    /// The last run set a new global or personal record.
    pub new_best: bool,
    /// Number of runs started this session.
    pub runs: u32,
}

impl GameState {
    pub fn new(config: &GameConfig, player_name: String, best: BestScores) -> Self {
        Self {
            phase: GamePhase::Idle,
            plane: Plane::spawn(config),
            obstacles: Vec::new(),
            score: 0,
            best,
            frame_count: 0,
            player_name,
            new_best: false,
            runs: 0,
        }
    }

    /// Fresh run: plane at spawn, no obstacles, zero score and frames.
    pub fn reset_run(&mut self, config: &GameConfig) {
        self.phase = GamePhase::Running;
        self.plane = Plane::spawn(config);
        self.obstacles.clear();
        self.score = 0;
        self.frame_count = 0;
        self.new_best = false;
        self.runs += 1;
    }
}
