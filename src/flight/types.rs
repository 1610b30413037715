//! Plane and obstacle data structures.

use crate::core::config::GameConfig;
use serde::{Deserialize, Serialize};

/// The player's glider. `x` never changes after spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/frame (positive = downward).
    pub velocity: f64,
    /// Display-only pitch in degrees (negative = nose up).
    pub tilt: f64,
}

impl Plane {
    /// Spawn at the vertical middle of the canvas, at rest.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: config.plane_x,
            y: config.canvas_height / 2.0,
            width: config.plane_width,
            height: config.plane_height,
            velocity: 0.0,
            tilt: 0.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// What happened to the plane during one physics update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaneStatus {
    /// Touched the ground. Terminal.
    pub hit_ground: bool,
    /// Touched the top of the canvas. Harmless.
    pub hit_ceiling: bool,
}

/// A top/bottom pipe pair with a fixed vertical gap between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    pub width: f64,
    /// Height of the top pipe, measured from the ceiling.
    pub top_height: f64,
    /// Top edge of the bottom pipe.
    pub bottom_y: f64,
    /// Height of the bottom pipe, from `bottom_y` down to the ground.
    pub bottom_height: f64,
    /// Set once the plane has cleared this obstacle.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, top_height: f64, config: &GameConfig) -> Self {
        let bottom_y = top_height + config.pipe_gap;
        Self {
            x,
            width: config.pipe_width,
            top_height,
            bottom_y,
            bottom_height: (config.floor_y() - bottom_y).max(0.0),
            passed: false,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Fully off the left edge of the canvas.
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}
