//! Tangent-pair planner.
//!
//! A non-recursive alternative to [`TangentRecursivePlanner`](super::TangentRecursivePlanner).
//! Obstacles are inflated further, then every pairing of a tangent seen
//! from the start with a tangent seen from the destination is turned into
//! a short polyline that wraps around the obstacle(s) between them. The
//! shortest valid polyline wins.

use log::{debug, trace};

use crate::core::geometry::{
    change_point_distance_to_circle, circle_tangent_points, closest_point_on_line,
    line_line_intersection, segment_intersects_circle,
};
use crate::core::{Circle, Vector2D};
use crate::query::{is_direct_path_clear, obstacle_circles, CollisionModel};
use crate::world::{Pitch, ROBOT_LENGTH_CM};

use super::adjust::{path_length, push_out_of_obstacles};
use super::pathfinder::Pathfinder;
use super::request::{PathResult, PlanRequest};
use super::waypoint::Waypoint;

/// Tangent-pair planner configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct TangentPairConfig {
    /// Extra radius added to every obstacle circle (cm)
    pub obstacle_inflation: f64,
    /// Distance the start and destination are pushed beyond an inflated
    /// obstacle they fall inside (cm)
    pub collision_margin: f64,
    /// Interior points closer than this to a wall are rejected (cm)
    pub pitch_padding: f64,
}

impl Default for TangentPairConfig {
    fn default() -> Self {
        Self::for_robot_length(ROBOT_LENGTH_CM)
    }
}

impl TangentPairConfig {
    /// Default search for a robot of the given length: obstacles grow by
    /// 0.7 lengths, corners stay half a length off the walls.
    pub fn for_robot_length(length: f64) -> Self {
        Self {
            obstacle_inflation: length * 7.0 / 10.0,
            collision_margin: 10.0,
            pitch_padding: length / 2.0,
        }
    }
}

/// A tangent point together with the obstacle it touches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleTangent {
    /// The (inflated) obstacle
    pub obstacle: Circle,
    /// Index of the obstacle in the planner's obstacle list
    pub obstacle_index: usize,
    /// Point where the sight line touches the obstacle
    pub point: Vector2D,
}

/// Tangent points from `from` to every obstacle, minus those whose sight
/// line passes through a different obstacle.
pub fn obstacle_tangents(obstacles: &[Circle], from: Vector2D) -> Vec<ObstacleTangent> {
    let mut tangents = Vec::new();
    for (index, obstacle) in obstacles.iter().enumerate() {
        let Some((a, b)) = circle_tangent_points(obstacle, from) else {
            continue;
        };
        for point in [a, b] {
            let occluded = obstacles
                .iter()
                .enumerate()
                .any(|(other, c)| other != index && segment_intersects_circle(from, point, c));
            if !occluded {
                tangents.push(ObstacleTangent {
                    obstacle: *obstacle,
                    obstacle_index: index,
                    point,
                });
            }
        }
    }
    tangents
}

/// Non-recursive tangent-pair planner.
#[derive(Clone, Debug, Default)]
pub struct TangentPairPlanner {
    config: TangentPairConfig,
    model: CollisionModel,
}

impl TangentPairPlanner {
    /// Create a new tangent-pair planner.
    pub fn new(config: TangentPairConfig, model: CollisionModel) -> Self {
        Self { config, model }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Planner configuration.
    pub fn config(&self) -> &TangentPairConfig {
        &self.config
    }

    /// Search for a route, `None` when no candidate polyline survives.
    pub fn find_path(&self, request: &PlanRequest<'_>) -> Option<Vec<Waypoint>> {
        let world = request.world;
        let robot = request.robot();
        let flags = request.obstacle_flags();
        let start = robot.position;
        let destination = request.destination;

        if is_direct_path_clear(world, start, destination, flags, &self.model) {
            debug!("[TangentPair] Direct path to {}", destination);
            return Some(vec![Waypoint::new(
                start,
                robot.angle,
                destination,
                start.distance(&destination),
                true,
            )]);
        }

        let padded = obstacle_circles(world, flags, &self.model);
        let inflated: Vec<Circle> = padded
            .iter()
            .map(|c| c.inflated(self.config.obstacle_inflation))
            .collect();

        let start_adj = push_out_of_obstacles(&inflated, start, self.config.collision_margin);
        let dest_adj = push_out_of_obstacles(&inflated, destination, self.config.collision_margin);

        // Destination tangents are taken from the raw goal: a goal buried
        // in an obstacle sees nothing of it.
        let start_tangents = obstacle_tangents(&inflated, start_adj);
        let dest_tangents = obstacle_tangents(&inflated, destination);
        trace!(
            "[TangentPair] {} start tangents, {} goal tangents",
            start_tangents.len(),
            dest_tangents.len()
        );

        let mut best: Option<(f64, Vec<Vector2D>)> = None;
        for st in &start_tangents {
            for dt in &dest_tangents {
                let Some(points) = self.candidate(&world.pitch, start_adj, st, dt, dest_adj) else {
                    continue;
                };
                if crosses_any(&points, &padded) {
                    continue;
                }
                let length = path_length(&points);
                if best.as_ref().map_or(true, |(l, _)| length < *l) {
                    best = Some((length, points));
                }
            }
        }

        match best {
            Some((length, mut points)) => {
                debug!(
                    "[TangentPair] Found {} legs, cost {:.1}cm",
                    points.len() - 1,
                    length
                );
                // The robot drives from where it actually is.
                points[0] = start;
                Some(waypoints_from_points(&points, robot.angle))
            }
            None => {
                debug!("[TangentPair] FAILED: no candidate to {}", destination);
                None
            }
        }
    }

    /// Polyline for one (start tangent, goal tangent) pairing.
    fn candidate(
        &self,
        pitch: &Pitch,
        start: Vector2D,
        st: &ObstacleTangent,
        dt: &ObstacleTangent,
        dest: Vector2D,
    ) -> Option<Vec<Vector2D>> {
        if st.point.approx_eq(&dt.point) {
            return Some(vec![start, st.point, dest]);
        }

        let start_bridge = bridge_point(&st.obstacle, st.point, dt.point);
        let mut dest_bridge = bridge_point(&dt.obstacle, st.point, dt.point);
        if st.obstacle_index == dt.obstacle_index || start_bridge.approx_eq(&dest_bridge) {
            dest_bridge = start_bridge + (dt.point - st.point);
        }

        let m1 = line_line_intersection(start, st.point, start_bridge, dest_bridge)?;
        let m2 = line_line_intersection(dest, dt.point, start_bridge, dest_bridge)?;
        if !pitch.contains_padded(m1, self.config.pitch_padding)
            || !pitch.contains_padded(m2, self.config.pitch_padding)
        {
            return None;
        }

        // The two sight lines cross before reaching the bridge line: a single
        // corner is enough.
        if m1.approx_eq(&m2) || (m2 - m1).dot(&(dt.point - st.point)) <= 0.0 {
            let corner = line_line_intersection(start, st.point, dest, dt.point)?;
            if !pitch.contains_padded(corner, self.config.pitch_padding) {
                return None;
            }
            return Some(vec![start, corner, dest]);
        }

        Some(vec![start, m1, m2, dest])
    }
}

/// Point on `obstacle`'s boundary nearest to the line through `a` and `b`.
fn bridge_point(obstacle: &Circle, a: Vector2D, b: Vector2D) -> Vector2D {
    let foot = closest_point_on_line(obstacle.centre, a, b);
    change_point_distance_to_circle(obstacle, foot, obstacle.radius())
}

/// Whether any leg of the polyline passes through one of the circles.
fn crosses_any(points: &[Vector2D], circles: &[Circle]) -> bool {
    points
        .windows(2)
        .any(|leg| circles.iter().any(|c| segment_intersects_circle(leg[0], leg[1], c)))
}

/// Turn a polyline into waypoints. The first leg starts at the robot's
/// heading; later legs start facing along the previous leg.
fn waypoints_from_points(points: &[Vector2D], start_heading: f64) -> Vec<Waypoint> {
    let legs = points.len().saturating_sub(1);
    let mut waypoints = Vec::with_capacity(legs);
    let mut remaining = 0.0;

    for i in (0..legs).rev() {
        let heading = if i == 0 {
            start_heading
        } else {
            (points[i] - points[i - 1]).direction()
        };
        remaining += points[i].distance(&points[i + 1]);
        waypoints.push(Waypoint::new(points[i], heading, points[i + 1], remaining, i == legs - 1));
    }

    waypoints.reverse();
    waypoints
}

impl Pathfinder for TangentPairPlanner {
    fn name(&self) -> &'static str {
        "tangent_pair"
    }

    fn plan(&self, request: &PlanRequest<'_>) -> PathResult {
        self.find_path(request).into()
    }
}
