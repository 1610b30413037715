//! Plane and pipe physics.
//!
//! The plane falls under constant gravity and jumps by overriding its
//! velocity. Pipes scroll left at a fixed speed and score once when the plane
//! clears them.

pub mod collision;
pub mod logic;
pub mod types;

pub use collision::*;
pub use logic::*;
pub use types::*;
