//! Game state, the per-frame tick and the frame loop.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod tick;

pub use config::GameConfig;
pub use constants::*;
pub use game_loop::{FrameId, FrameScheduler, GameSession, InputOutcome};
pub use game_state::{GamePhase, GameState};
pub use tick::{game_tick, CrashCause, TickEvent, TickResult};
