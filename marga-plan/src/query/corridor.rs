//! Swept-corridor visibility test.
//!
//! A straight move is clear when a fan of rays parallel to it, spread across
//! the robot's width, all travel at least as far as the target.

use crate::core::Vector2D;
use crate::world::{ObstacleFlags, WorldState};

use super::obstacles::CollisionModel;
use super::raycast::closest_collision;

/// Nearest collisions for the pair of rays offset `±fraction * width / 2`
/// perpendicular to `start → towards`.
pub fn side_collisions(
    world: &WorldState,
    start: Vector2D,
    towards: Vector2D,
    fraction: f64,
    flags: ObstacleFlags,
    model: &CollisionModel,
) -> (Vector2D, Vector2D) {
    let direction = towards - start;
    let offset = direction
        .perpendicular()
        .with_length(fraction * model.half_width());

    (
        closest_collision(world, start + offset, direction, flags, model),
        closest_collision(world, start - offset, direction, flags, model),
    )
}

/// Whether the robot can drive straight from `a` to `b` without touching a
/// flagged obstacle or wall.
pub fn is_direct_path_clear(
    world: &WorldState,
    a: Vector2D,
    b: Vector2D,
    flags: ObstacleFlags,
    model: &CollisionModel,
) -> bool {
    let required = a.distance(&b) - model.tolerance;
    if required <= 0.0 {
        return true;
    }

    model.corridor_fractions.iter().all(|&fraction| {
        let (left, right) = side_collisions(world, a, b, fraction, flags, model);
        left.length() >= required && right.length() >= required
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Robot, Team};

    fn world_with_yellow_at(position: Vector2D) -> WorldState {
        WorldState::new(
            Vector2D::new(30.0, 100.0),
            Robot::new(Vector2D::new(20.0, 56.85), 0.0),
            Robot::new(position, 0.0),
        )
    }

    #[test]
    fn test_clear_on_empty_pitch() {
        let model = CollisionModel::default();
        let world = world_with_yellow_at(Vector2D::new(120.0, 100.0));
        let flags = ObstacleFlags::for_opponent(false, Team::Blue);
        assert!(is_direct_path_clear(
            &world,
            Vector2D::new(20.0, 56.85),
            Vector2D::new(220.0, 56.85),
            flags,
            &model
        ));
    }

    #[test]
    fn test_blocked_by_robot_on_line() {
        let model = CollisionModel::default();
        let world = world_with_yellow_at(Vector2D::new(120.0, 56.85));
        let flags = ObstacleFlags::for_opponent(false, Team::Blue);
        assert!(!is_direct_path_clear(
            &world,
            Vector2D::new(20.0, 56.85),
            Vector2D::new(220.0, 56.85),
            flags,
            &model
        ));
        // Unflagged robot does not block
        assert!(is_direct_path_clear(
            &world,
            Vector2D::new(20.0, 56.85),
            Vector2D::new(220.0, 56.85),
            ObstacleFlags::NONE,
            &model
        ));
    }

    #[test]
    fn test_corridor_catches_robot_beside_centre_line() {
        let model = CollisionModel::default();
        // Footprint spans y 62..80: misses the centre ray but not the widest ones
        let world = world_with_yellow_at(Vector2D::new(120.0, 71.0));
        let flags = ObstacleFlags::for_opponent(false, Team::Blue);
        let (left, right) = side_collisions(
            &world,
            Vector2D::new(20.0, 56.85),
            Vector2D::new(220.0, 56.85),
            0.0,
            flags,
            &model,
        );
        assert!(left.length() > 199.0 && right.length() > 199.0);
        assert!(!is_direct_path_clear(
            &world,
            Vector2D::new(20.0, 56.85),
            Vector2D::new(220.0, 56.85),
            flags,
            &model
        ));
    }

    #[test]
    fn test_stops_short_of_obstacle() {
        let model = CollisionModel::default();
        let world = world_with_yellow_at(Vector2D::new(120.0, 56.85));
        let flags = ObstacleFlags::for_opponent(false, Team::Blue);
        // Yellow back edge is at x = 110
        assert!(is_direct_path_clear(
            &world,
            Vector2D::new(20.0, 56.85),
            Vector2D::new(100.0, 56.85),
            flags,
            &model
        ));
    }

    #[test]
    fn test_origin_near_wall_is_blocked() {
        let model = CollisionModel::default();
        let world = world_with_yellow_at(Vector2D::new(120.0, 100.0));
        // Widest ray starts off the pitch
        assert!(!is_direct_path_clear(
            &world,
            Vector2D::new(5.0, 56.85),
            Vector2D::new(5.0, 20.0),
            ObstacleFlags::NONE,
            &model
        ));
    }

    #[test]
    fn test_zero_length_move_is_clear() {
        let model = CollisionModel::default();
        let world = world_with_yellow_at(Vector2D::new(120.0, 56.85));
        let p = Vector2D::new(50.0, 50.0);
        assert!(is_direct_path_clear(&world, p, p, ObstacleFlags::YELLOW, &model));
    }
}
