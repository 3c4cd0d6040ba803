//! Planner inputs and outputs.

use crate::core::Vector2D;
use crate::world::{ObstacleFlags, Robot, Team, WorldState};

use super::waypoint::Waypoint;

/// One planning call: route `own_team`'s robot to `destination`.
#[derive(Clone, Copy, Debug)]
pub struct PlanRequest<'a> {
    /// Snapshot for this tick
    pub world: &'a WorldState,
    /// Which robot is planning
    pub own_team: Team,
    /// Destination in pitch coordinates (cm)
    pub destination: Vector2D,
    /// Whether the ball must be avoided
    pub ball_is_obstacle: bool,
}

impl<'a> PlanRequest<'a> {
    /// Create a request.
    pub fn new(world: &'a WorldState, own_team: Team, destination: Vector2D, ball_is_obstacle: bool) -> Self {
        Self {
            world,
            own_team,
            destination,
            ball_is_obstacle,
        }
    }

    /// The planning robot.
    #[inline]
    pub fn robot(&self) -> &'a Robot {
        self.world.robot(self.own_team)
    }

    /// Obstacles this robot must avoid.
    #[inline]
    pub fn obstacle_flags(&self) -> ObstacleFlags {
        ObstacleFlags::for_opponent(self.ball_is_obstacle, self.own_team)
    }
}

/// Outcome of a planning call.
#[derive(Clone, Debug, PartialEq)]
pub enum PathResult {
    /// Ordered, non-empty list of legs; the last one reaches the destination
    /// unless it came from the heuristic planner.
    Path(Vec<Waypoint>),
    /// The strategy could not build a route. Not an error: callers fall
    /// back to another strategy.
    NoPath,
}

impl PathResult {
    /// Wrap waypoints, mapping an empty list to [`PathResult::NoPath`].
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Self {
        if waypoints.is_empty() {
            PathResult::NoPath
        } else {
            PathResult::Path(waypoints)
        }
    }

    /// Whether a route was found.
    #[inline]
    pub fn is_path(&self) -> bool {
        matches!(self, PathResult::Path(_))
    }

    /// The waypoints, if any.
    pub fn waypoints(&self) -> Option<&[Waypoint]> {
        match self {
            PathResult::Path(w) => Some(w),
            PathResult::NoPath => None,
        }
    }

    /// The first leg, the one to execute now.
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints().and_then(|w| w.first())
    }

    /// Consume into the waypoint list (empty for no path).
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        match self {
            PathResult::Path(w) => w,
            PathResult::NoPath => Vec::new(),
        }
    }

    /// Total route length, as reported by the first waypoint.
    pub fn cost(&self) -> Option<f64> {
        self.first().map(Waypoint::cost_to_destination)
    }
}

impl From<Option<Vec<Waypoint>>> for PathResult {
    fn from(path: Option<Vec<Waypoint>>) -> Self {
        path.map_or(PathResult::NoPath, PathResult::from_waypoints)
    }
}
