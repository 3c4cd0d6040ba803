//! Ray casting against pitch walls and flagged obstacles.
//!
//! Walls are the pitch boundary. The ball blocks a ray with a segment
//! through its centre, perpendicular to the ray. Robots block with the
//! four edges of their rectangular footprint.

use crate::core::geometry::ray_segment_intersection;
use crate::core::Vector2D;
use crate::world::{ObstacleFlags, Team, WorldState};

use super::obstacles::CollisionModel;

/// What stopped a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blocker {
    /// A pitch wall
    Wall,
    /// The ball
    Ball,
    /// A robot footprint
    Robot(Team),
}

/// Result of a ray cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastResult {
    /// Vector from the ray origin to the nearest hit.
    pub offset: Vector2D,
    /// What was hit, if anything was hit before the cap.
    pub blocker: Option<Blocker>,
}

impl RaycastResult {
    /// Distance to the hit.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.offset.length()
    }

    fn blocked_at_origin() -> Self {
        Self {
            offset: Vector2D::ZERO,
            blocker: Some(Blocker::Wall),
        }
    }
}

/// Vector from `origin` to the nearest collision along `direction`.
///
/// An origin off the pitch yields the zero vector: the ray is blocked
/// before it starts.
pub fn closest_collision(
    world: &WorldState,
    origin: Vector2D,
    direction: Vector2D,
    flags: ObstacleFlags,
    model: &CollisionModel,
) -> Vector2D {
    closest_collision_detailed(world, origin, direction, flags, model).offset
}

/// Like [`closest_collision`], also reporting what was hit.
pub fn closest_collision_detailed(
    world: &WorldState,
    origin: Vector2D,
    direction: Vector2D,
    flags: ObstacleFlags,
    model: &CollisionModel,
) -> RaycastResult {
    if !world.pitch.contains(origin) {
        return RaycastResult::blocked_at_origin();
    }

    let mut best = RaycastResult {
        offset: direction.with_length(world.pitch.diagonal()),
        blocker: None,
    };
    let mut best_dist = world.pitch.diagonal();
    let mut consider = |s1: Vector2D, s2: Vector2D, blocker: Blocker| {
        if let Some(hit) = ray_segment_intersection(origin, direction, s1, s2) {
            let dist = hit.length();
            if dist < best_dist {
                best_dist = dist;
                best = RaycastResult {
                    offset: hit,
                    blocker: Some(blocker),
                };
            }
        }
    };

    for (s1, s2) in world.pitch.walls() {
        consider(s1, s2, Blocker::Wall);
    }

    if flags.contains(ObstacleFlags::BALL) {
        let half = direction.perpendicular().with_length(model.ball_radius);
        consider(world.ball + half, world.ball - half, Blocker::Ball);
    }

    for team in [Team::Blue, Team::Yellow] {
        if !flags.contains(ObstacleFlags::robot(team)) {
            continue;
        }
        let corners = world.robot(team).corners();
        for i in 0..corners.len() {
            consider(corners[i], corners[(i + 1) % corners.len()], Blocker::Robot(team));
        }
    }

    best
}
