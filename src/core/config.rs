//! Tunable game parameters.
//!
//! Every field falls back to the compiled-in constant, so a partial
//! `config.json` only overrides what it names. Loaded once at startup.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub ground_height: f64,

    pub plane_x: f64,
    pub plane_width: f64,
    pub plane_height: f64,
    pub gravity: f64,
    pub jump_velocity: f64,
    pub tilt_gain: f64,
    pub min_tilt: f64,
    pub max_tilt: f64,

    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_speed: f64,
    pub pipe_min_top: u32,
    pub spawn_interval: u64,

    /// Frames per second. One simulation step runs per frame.
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,

            plane_x: PLANE_X,
            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            tilt_gain: TILT_GAIN,
            min_tilt: MIN_TILT,
            max_tilt: MAX_TILT,

            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_min_top: PIPE_MIN_TOP,
            spawn_interval: SPAWN_INTERVAL_FRAMES,

            fps: DEFAULT_FPS,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the top of the ground strip.
    pub fn floor_y(&self) -> f64 {
        self.canvas_height - self.ground_height
    }

    /// Inclusive range for a pipe's top height. The lower bound never
    /// exceeds the upper one, even for a playfield too short for the gap.
    pub fn top_height_bounds(&self) -> (u32, u32) {
        let min_top = self.pipe_min_top;
        let max_top = self.floor_y() - self.pipe_gap - min_top as f64;
        let max_top = if max_top.is_finite() && max_top > 0.0 {
            max_top.floor() as u32
        } else {
            0
        };
        (min_top.min(max_top), max_top)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Clamp values that would make the game unplayable or panic.
    ///
    /// Returns the names of the fields that were changed.
    pub fn validate(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut fixed = Vec::new();

        if self.fps == 0 || self.fps > MAX_FPS {
            self.fps = self.fps.clamp(1, MAX_FPS);
            fixed.push("fps");
        }
        if self.spawn_interval == 0 {
            self.spawn_interval = defaults.spawn_interval;
            fixed.push("spawn_interval");
        }
        positive_or(&mut self.canvas_width, defaults.canvas_width, "canvas_width", &mut fixed);
        positive_or(&mut self.canvas_height, defaults.canvas_height, "canvas_height", &mut fixed);
        if self.ground_height.is_nan()
            || self.ground_height < 0.0
            || self.ground_height >= self.canvas_height
        {
            self.ground_height = defaults.ground_height.min(self.canvas_height / 2.0);
            fixed.push("ground_height");
        }
        positive_or(&mut self.plane_width, defaults.plane_width, "plane_width", &mut fixed);
        if self.plane_height.is_nan()
            || self.plane_height <= 0.0
            || self.plane_height >= self.floor_y()
        {
            self.plane_height = defaults.plane_height.min(self.floor_y() / 2.0);
            fixed.push("plane_height");
        }
        positive_or(&mut self.pipe_width, defaults.pipe_width, "pipe_width", &mut fixed);
        positive_or(&mut self.pipe_speed, defaults.pipe_speed, "pipe_speed", &mut fixed);

        // Both pipes keep min_top and the gap still fits the plane.
        let max_min_top = ((self.floor_y() - self.plane_height - 1.0) / 2.0)
            .floor()
            .max(0.0) as u32;
        if self.pipe_min_top > max_min_top {
            self.pipe_min_top = defaults.pipe_min_top.min(max_min_top);
            fixed.push("pipe_min_top");
        }

        let max_gap = self.floor_y() - 2.0 * self.pipe_min_top as f64;
        if self.pipe_gap.is_nan() || self.pipe_gap <= self.plane_height || self.pipe_gap > max_gap {
            self.pipe_gap = defaults.pipe_gap.min(max_gap.max(self.plane_height + 1.0));
            fixed.push("pipe_gap");
        }
        if self.min_tilt > self.max_tilt {
            std::mem::swap(&mut self.min_tilt, &mut self.max_tilt);
            fixed.push("tilt");
        }

        fixed
    }
}

/// Replace a non-positive (or NaN) value with its default.
fn positive_or(value: &mut f64, default: f64, name: &'static str, fixed: &mut Vec<&'static str>) {
    if value.is_nan() || *value <= 0.0 {
        *value = default;
        fixed.push(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::spawn_obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_bounds_match_reference_layout() {
        let config = GameConfig::default();
        assert_eq!(config.floor_y(), 570.0);
        assert_eq!(config.top_height_bounds(), (50, 380));
    }

    #[test]
    fn test_default_config_is_valid() {
        let mut config = GameConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "fps": 30 }"#).unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.pipe_gap, PIPE_GAP);
        assert_eq!(config.spawn_interval, SPAWN_INTERVAL_FRAMES);
    }

    #[test]
    fn test_validate_fixes_zero_interval_and_fps() {
        let mut config = GameConfig {
            fps: 0,
            spawn_interval: 0,
            ..GameConfig::default()
        };
        let fixed = config.validate();
        assert!(fixed.contains(&"fps"));
        assert!(fixed.contains(&"spawn_interval"));
        assert_eq!(config.fps, 1);
        assert_eq!(config.spawn_interval, SPAWN_INTERVAL_FRAMES);
    }

    #[test]
    fn test_validate_shrinks_oversized_gap() {
        let mut config = GameConfig {
            pipe_gap: 10_000.0,
            ..GameConfig::default()
        };
        config.validate();
        let (min_top, max_top) = config.top_height_bounds();
        assert!(min_top <= max_top);
        assert!(config.pipe_gap <= config.floor_y() - 2.0 * config.pipe_min_top as f64);
    }

    #[test]
    fn test_validate_clamps_oversized_min_top() {
        let mut config = GameConfig {
            pipe_min_top: 400,
            ..GameConfig::default()
        };
        let fixed = config.validate();
        assert!(fixed.contains(&"pipe_min_top"));
        assert_eq!(config.pipe_min_top, PIPE_MIN_TOP);
        assert_eq!(config.pipe_gap, PIPE_GAP);

        let (min_top, max_top) = config.top_height_bounds();
        assert!(min_top >= config.pipe_min_top);
        assert!(min_top <= max_top);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let obstacle = spawn_obstacle(&mut rng, &config);
            assert!(obstacle.top_height >= config.pipe_min_top as f64);
            assert!(obstacle.bottom_height >= config.pipe_min_top as f64);
        }
    }

    #[test]
    fn test_validate_min_top_on_short_playfield() {
        // floor_y 170, plane 30: min_top can be at most 69
        let mut config = GameConfig {
            canvas_height: 200.0,
            pipe_min_top: 100,
            ..GameConfig::default()
        };
        config.validate();
        assert_eq!(config.pipe_min_top, 50);
        assert!(config.pipe_gap > config.plane_height);
        let (min_top, max_top) = config.top_height_bounds();
        assert_eq!(min_top, 50);
        assert!(max_top >= min_top);
    }

    #[test]
    fn test_validate_replaces_nan_and_negative() {
        let mut config = GameConfig {
            pipe_speed: f64::NAN,
            plane_width: -4.0,
            ..GameConfig::default()
        };
        let fixed = config.validate();
        assert!(fixed.contains(&"pipe_speed"));
        assert!(fixed.contains(&"plane_width"));
        assert_eq!(config.pipe_speed, PIPE_SPEED);
        assert_eq!(config.plane_width, PLANE_WIDTH);
    }

    #[test]
    fn test_frame_interval() {
        let config = GameConfig {
            fps: 50,
            ..GameConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }
}
