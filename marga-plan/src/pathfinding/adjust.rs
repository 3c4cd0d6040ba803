//! Point adjustment shared by the tangent planners.

use log::warn;

use crate::core::geometry::change_point_distance_to_circle;
use crate::core::{Circle, Vector2D};

/// Passes over the obstacle list before giving up on a point that keeps
/// landing inside another obstacle.
const MAX_PUSH_PASSES: usize = 16;

/// Move `point` out of every obstacle it penetrates.
///
/// A penetrated obstacle pushes the point radially to `radius + margin`
/// from its centre. Pushing out of one obstacle can land the point inside
/// another, so passes repeat until nothing moves. Overlapping obstacles
/// can trap a point; after a bounded number of passes the last position is
/// returned as is.
pub fn push_out_of_obstacles(obstacles: &[Circle], point: Vector2D, margin: f64) -> Vector2D {
    let mut adjusted = point;
    for _ in 0..MAX_PUSH_PASSES {
        let mut moved = false;
        for obstacle in obstacles {
            if obstacle.contains(adjusted) {
                adjusted = change_point_distance_to_circle(obstacle, adjusted, obstacle.radius() + margin);
                moved = true;
            }
        }
        if !moved {
            return adjusted;
        }
    }

    warn!(
        "[Planner] point {} still inside an obstacle after {} passes",
        point, MAX_PUSH_PASSES
    );
    adjusted
}

/// Total length of a polyline.
pub fn path_length(points: &[Vector2D]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
