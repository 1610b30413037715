//! Pipe collision and scoring.
//!
//! Ground and ceiling contact is reported by [`super::logic::update_plane`];
//! this module only looks at obstacles.

use super::types::{Obstacle, Plane};

/// Outcome of checking the plane against every live obstacle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// The plane struck a pipe. Terminal.
    pub crashed: bool,
    /// Obstacles newly passed this frame.
    pub points: u32,
}

/// Half-open horizontal span intersection.
pub fn overlaps_horizontally(plane: &Plane, obstacle: &Obstacle) -> bool {
    plane.x < obstacle.right() && plane.right() > obstacle.x
}

/// Plane is outside the gap of an obstacle it overlaps horizontally.
pub fn hits_pipe(plane: &Plane, obstacle: &Obstacle) -> bool {
    overlaps_horizontally(plane, obstacle)
        && (plane.y < obstacle.top_height || plane.bottom() > obstacle.bottom_y)
}

/// Mark the obstacle passed if the plane has cleared it. Returns true only on
/// the frame the flag flips.
pub fn try_score(plane: &Plane, obstacle: &mut Obstacle) -> bool {
    if !obstacle.passed && plane.x > obstacle.right() {
        obstacle.passed = true;
        return true;
    }
    false
}

/// Walk obstacles oldest first. A crash stops the walk; points from obstacles
/// before it still count.
pub fn check_obstacles(plane: &Plane, obstacles: &mut [Obstacle]) -> CollisionReport {
    let mut report = CollisionReport::default();

    for obstacle in obstacles.iter_mut() {
        if hits_pipe(plane, obstacle) {
            report.crashed = true;
            return report;
        }
        if try_score(plane, obstacle) {
            report.points += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn plane_at(y: f64) -> Plane {
        let mut plane = Plane::spawn(&GameConfig::default());
        plane.y = y;
        plane
    }

    fn obstacle_at(x: f64, top: f64) -> Obstacle {
        Obstacle::new(x, top, &GameConfig::default())
    }

    #[test]
    fn test_no_overlap_when_obstacle_is_ahead() {
        // Plane spans 50..90, obstacle spans 100..150
        let plane = plane_at(0.0);
        let obstacle = obstacle_at(100.0, 300.0);
        assert!(!overlaps_horizontally(&plane, &obstacle));
        assert!(!hits_pipe(&plane, &obstacle));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let plane = plane_at(0.0);
        assert!(!overlaps_horizontally(&plane, &obstacle_at(90.0, 300.0)));
        assert!(!overlaps_horizontally(&plane, &obstacle_at(0.0, 300.0)));
        assert!(overlaps_horizontally(&plane, &obstacle_at(89.9, 300.0)));
        assert!(overlaps_horizontally(&plane, &obstacle_at(0.1, 300.0)));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Gap spans 200..340, plane spans 250..280
        let plane = plane_at(250.0);
        let obstacle = obstacle_at(60.0, 200.0);
        assert!(overlaps_horizontally(&plane, &obstacle));
        assert!(!hits_pipe(&plane, &obstacle));
    }

    #[test]
    fn test_top_pipe_hit() {
        let plane = plane_at(199.0);
        assert!(hits_pipe(&plane, &obstacle_at(60.0, 200.0)));
    }

    #[test]
    fn test_bottom_pipe_hit() {
        // Plane bottom 341 > bottom_y 340
        let plane = plane_at(311.0);
        assert!(hits_pipe(&plane, &obstacle_at(60.0, 200.0)));
        let plane = plane_at(310.0);
        assert!(!hits_pipe(&plane, &obstacle_at(60.0, 200.0)));
    }

    #[test]
    fn test_scores_exactly_once() {
        let plane = plane_at(250.0);
        let mut obstacle = obstacle_at(-1.0, 200.0);
        assert!(try_score(&plane, &mut obstacle));
        assert!(obstacle.passed);
        assert!(!try_score(&plane, &mut obstacle));
        assert!(!try_score(&plane, &mut obstacle));
    }

    #[test]
    fn test_no_score_while_still_alongside() {
        let plane = plane_at(250.0);
        // Right edge at 50 equals plane.x, not yet passed
        let mut obstacle = obstacle_at(0.0, 200.0);
        assert!(!try_score(&plane, &mut obstacle));
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_crash_stops_processing() {
        let plane = plane_at(10.0);
        let mut obstacles = vec![
            obstacle_at(-10.0, 200.0),
            obstacle_at(60.0, 200.0),
            obstacle_at(-20.0, 200.0),
        ];
        let report = check_obstacles(&plane, &mut obstacles);
        assert!(report.crashed);
        assert_eq!(report.points, 1);
        assert!(obstacles[0].passed);
        assert!(!obstacles[2].passed);
    }

    #[test]
    fn test_multiple_points_in_one_frame() {
        let plane = plane_at(250.0);
        let mut obstacles = vec![obstacle_at(-30.0, 200.0), obstacle_at(-5.0, 200.0)];
        let report = check_obstacles(&plane, &mut obstacles);
        assert!(!report.crashed);
        assert_eq!(report.points, 2);
        assert_eq!(check_obstacles(&plane, &mut obstacles).points, 0);
    }
}
