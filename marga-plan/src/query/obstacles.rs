//! Obstacle circles derived from a world snapshot.

use crate::core::{Circle, Vector2D};
use crate::world::{ObstacleFlags, Team, WorldState, ROBOT_LENGTH_CM, ROBOT_WIDTH_CM};

/// Collision parameters shared by the visibility query and every planner.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionModel {
    /// Ball footprint radius (cm). Also the half-length of the ball's
    /// blocking segment in ray casts.
    pub ball_radius: f64,
    /// Robot footprint radius (cm)
    pub robot_radius: f64,
    /// Added to every obstacle radius when building circles (cm)
    pub padding: f64,
    /// Width of the planning robot (cm); sets the swept corridor width
    pub robot_width: f64,
    /// Corridor ray offsets as fractions of half the robot width
    pub corridor_fractions: Vec<f64>,
    /// Slack allowed when comparing hit distance against path length (cm)
    pub tolerance: f64,
}

impl Default for CollisionModel {
    fn default() -> Self {
        Self::for_robot(ROBOT_LENGTH_CM, ROBOT_WIDTH_CM)
    }
}

impl CollisionModel {
    /// Standard obstacle sizes for a planning robot of the given footprint.
    /// Obstacles are padded by half the robot length.
    pub fn for_robot(length: f64, width: f64) -> Self {
        Self {
            ball_radius: 10.0,
            robot_radius: 20.0,
            padding: length * 0.5,
            robot_width: width,
            corridor_fractions: vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.2],
            tolerance: 0.001,
        }
    }

    /// Ball obstacle radius including padding.
    #[inline]
    pub fn padded_ball_radius(&self) -> f64 {
        self.ball_radius + self.padding
    }

    /// Robot obstacle radius including padding.
    #[inline]
    pub fn padded_robot_radius(&self) -> f64 {
        self.robot_radius + self.padding
    }

    /// Half the swept corridor width.
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.robot_width / 2.0
    }

    /// Widest corridor ray offset from the centre line.
    pub fn max_corridor_offset(&self) -> f64 {
        self.corridor_fractions
            .iter()
            .fold(0.0_f64, |acc, f| acc.max(f.abs()))
            * self.half_width()
    }
}

/// One padded circle per flagged entity, ball first.
pub fn obstacle_circles(world: &WorldState, flags: ObstacleFlags, model: &CollisionModel) -> Vec<Circle> {
    let mut circles = Vec::with_capacity(3);
    if flags.contains(ObstacleFlags::BALL) {
        circles.push(Circle::new(world.ball, model.padded_ball_radius()));
    }
    for team in [Team::Blue, Team::Yellow] {
        if flags.contains(ObstacleFlags::robot(team)) {
            circles.push(Circle::new(world.robot(team).position, model.padded_robot_radius()));
        }
    }
    circles
}

/// Whether `point` lies inside any of the circles.
#[inline]
pub fn inside_any(circles: &[Circle], point: Vector2D) -> bool {
    circles.iter().any(|c| c.contains(point))
}
