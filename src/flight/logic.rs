//! Per-frame physics for the plane and obstacles.
//!
//! These functions only mutate the entity they are given and report what
//! happened. Deciding whether a run is over belongs to the caller.

use super::types::{Obstacle, Plane, PlaneStatus};
use crate::core::config::GameConfig;
use rand::Rng;

/// Advance the plane by one frame: gravity, motion, tilt, then clamping to
/// the playfield.
pub fn update_plane(plane: &mut Plane, config: &GameConfig) -> PlaneStatus {
    let mut status = PlaneStatus::default();

    plane.velocity += config.gravity;
    plane.y += plane.velocity;
    plane.tilt = (plane.velocity * config.tilt_gain).clamp(config.min_tilt, config.max_tilt);

    let floor = config.floor_y() - plane.height;
    if plane.y > floor {
        plane.y = floor;
        plane.velocity = 0.0;
        status.hit_ground = true;
    }
    if plane.y < 0.0 {
        plane.y = 0.0;
        plane.velocity = 0.0;
        status.hit_ceiling = true;
    }

    status
}

/// Upward impulse. Replaces the current velocity rather than adding to it.
pub fn jump(plane: &mut Plane, config: &GameConfig) {
    plane.velocity = config.jump_velocity;
}

pub fn update_obstacle(obstacle: &mut Obstacle, config: &GameConfig) {
    obstacle.x -= config.pipe_speed;
}

/// Whether an obstacle is due on this frame.
pub fn should_spawn(frame_count: u64, config: &GameConfig) -> bool {
    frame_count % config.spawn_interval.max(1) == 0
}

/// Draw a top height uniformly from the configured inclusive range.
pub fn random_top_height<R: Rng>(rng: &mut R, config: &GameConfig) -> u32 {
    let (min_top, max_top) = config.top_height_bounds();
    rng.gen_range(min_top..=max_top)
}

/// New obstacle at the right edge of the canvas.
pub fn spawn_obstacle<R: Rng>(rng: &mut R, config: &GameConfig) -> Obstacle {
    let top_height = random_top_height(rng, config);
    Obstacle::new(config.canvas_width, top_height as f64, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_gravity_pulls_plane_down() {
        let config = GameConfig::default();
        let mut plane = Plane::spawn(&config);
        let status = update_plane(&mut plane, &config);
        assert!((plane.velocity - 0.3).abs() < 1e-9);
        assert!((plane.y - 300.3).abs() < 1e-9);
        assert_eq!(status, PlaneStatus::default());
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let config = GameConfig::default();
        let mut plane = Plane::spawn(&config);
        plane.velocity = 12.5;
        jump(&mut plane, &config);
        assert_eq!(plane.velocity, config.jump_velocity);
        plane.velocity = -3.0;
        jump(&mut plane, &config);
        assert_eq!(plane.velocity, config.jump_velocity);
    }

    #[test]
    fn test_ground_snaps_and_reports() {
        let config = GameConfig::default();
        let mut plane = Plane::spawn(&config);
        plane.y = 538.0;
        plane.velocity = 5.0;
        let status = update_plane(&mut plane, &config);
        assert!(status.hit_ground);
        assert!(!status.hit_ceiling);
        assert_eq!(plane.y, config.floor_y() - plane.height);
        assert_eq!(plane.velocity, 0.0);
    }

    #[test]
    fn test_resting_exactly_on_floor_is_not_a_hit() {
        let config = GameConfig {
            gravity: 0.0,
            ..GameConfig::default()
        };
        let mut plane = Plane::spawn(&config);
        plane.y = config.floor_y() - plane.height;
        let status = update_plane(&mut plane, &config);
        assert!(!status.hit_ground);
    }

    #[test]
    fn test_ceiling_clamps_without_ending() {
        let config = GameConfig::default();
        let mut plane = Plane::spawn(&config);
        plane.y = 2.0;
        plane.velocity = -6.0;
        let status = update_plane(&mut plane, &config);
        assert!(status.hit_ceiling);
        assert!(!status.hit_ground);
        assert_eq!(plane.y, 0.0);
        assert_eq!(plane.velocity, 0.0);
    }

    #[test]
    fn test_tilt_is_clamped() {
        let config = GameConfig::default();
        let mut plane = Plane::spawn(&config);
        plane.velocity = 100.0;
        update_plane(&mut plane, &config);
        assert_eq!(plane.tilt, config.max_tilt);

        let mut plane = Plane::spawn(&config);
        plane.velocity = -50.0;
        update_plane(&mut plane, &config);
        assert_eq!(plane.tilt, config.min_tilt);
    }

    #[test]
    fn test_obstacle_moves_left() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(400.0, 100.0, &config);
        update_obstacle(&mut obstacle, &config);
        assert_eq!(obstacle.x, 398.0);
    }

    #[test]
    fn test_spawn_schedule() {
        let config = GameConfig::default();
        assert!(should_spawn(0, &config));
        assert!(!should_spawn(1, &config));
        assert!(!should_spawn(89, &config));
        assert!(should_spawn(90, &config));
        assert!(should_spawn(180, &config));
    }

    #[test]
    fn test_spawned_obstacle_starts_at_right_edge() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let obstacle = spawn_obstacle(&mut rng, &config);
        assert_eq!(obstacle.x, config.canvas_width);
        assert_eq!(obstacle.width, config.pipe_width);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_top_height_stays_in_range() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen_min = u32::MAX;
        let mut seen_max = 0;
        for _ in 0..5_000 {
            let top = random_top_height(&mut rng, &config);
            assert!((50..=380).contains(&top));
            seen_min = seen_min.min(top);
            seen_max = seen_max.max(top);
        }
        // Both ends of the inclusive range are reachable
        assert_eq!(seen_min, 50);
        assert_eq!(seen_max, 380);
    }
}
