//! Skyglider - terminal arcade glider game.
//!
//! Core modules:
//! - `core`: game state, per-frame tick, frame scheduler and session
//! - `flight`: plane and pipe physics, collision and scoring
//! - `scores`: key-value store and best-score records
//! - `player`: player name handling
//! - `ui`: ratatui rendering (reads state only)

pub mod build_info;
pub mod core;
pub mod flight;
pub mod input;
pub mod logging;
pub mod player;
pub mod scores;
pub mod ui;
pub mod utils;

pub use crate::core::{
    GameConfig, GamePhase, GameSession, GameState, InputOutcome, TickEvent, TickResult,
};
pub use flight::{Obstacle, Plane};
pub use scores::{BestScores, JsonFileStore, KeyValueStore, MemoryStore};
