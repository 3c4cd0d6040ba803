//! Tangent-recursive planner.
//!
//! Depth-first search over obstacle tangent points. From the current point
//! the planner either drives straight to the destination, or tries every
//! tangent point it can reach and recurses from there, keeping the
//! cheapest complete route.
//!
//! Two per-call structures bound the search:
//! - a stack of checked regions around the points on the current branch,
//!   so a branch never revisits its own neighbourhood;
//! - a memo of solved regions, so different branches arriving at the same
//!   neighbourhood reuse the earlier answer.

use log::{debug, trace};

use crate::core::geometry::{change_point_distance_to_circle, circle_tangent_points};
use crate::core::{Circle, Vector2D};
use crate::query::{inside_any, is_direct_path_clear, obstacle_circles, CollisionModel};
use crate::world::{ObstacleFlags, WorldState, ROBOT_LENGTH_CM};

use super::adjust::push_out_of_obstacles;
use super::pathfinder::Pathfinder;
use super::request::{PathResult, PlanRequest};
use super::waypoint::Waypoint;

/// Tangent-recursive planner configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RecursiveConfig {
    /// Maximum recursion depth, i.e. the most legs a route can have
    pub max_depth: usize,
    /// Distance tangent points and penetrating points are pushed beyond
    /// an obstacle's boundary (cm)
    pub collision_margin: f64,
    /// Radius of checked and memoized regions (cm)
    pub region_radius: f64,
    /// Reuse answers for already-solved regions
    pub use_memoization: bool,
    /// Tangent points closer than this to a wall are skipped (cm)
    pub pitch_padding: f64,
}

impl Default for RecursiveConfig {
    fn default() -> Self {
        Self::for_robot_length(ROBOT_LENGTH_CM)
    }
}

impl RecursiveConfig {
    /// Default search keeping tangent points half a robot length off the walls.
    pub fn for_robot_length(length: f64) -> Self {
        Self {
            max_depth: 10,
            collision_margin: 5.0,
            region_radius: 5.0,
            use_memoization: true,
            pitch_padding: length / 2.0,
        }
    }
}

/// A solved sub-problem: the best route from anywhere in `region`.
#[derive(Clone, Debug)]
struct PartialPath {
    region: Circle,
    waypoints: Option<Vec<Waypoint>>,
}

/// Scratch state of one planning call.
#[derive(Debug, Default)]
struct SearchContext {
    checked: Vec<Circle>,
    memo: Vec<PartialPath>,
    nodes_expanded: usize,
}

impl SearchContext {
    fn is_checked(&self, point: Vector2D) -> bool {
        self.checked.iter().any(|c| c.contains(point))
    }

    fn lookup(&self, point: Vector2D) -> Option<&PartialPath> {
        self.memo.iter().find(|p| p.region.contains(point))
    }
}

/// Fixed inputs of one planning call.
struct Problem<'a> {
    world: &'a WorldState,
    flags: ObstacleFlags,
    obstacles: Vec<Circle>,
    destination: Vector2D,
}

/// Depth-bounded recursive tangent search.
#[derive(Clone, Debug, Default)]
pub struct TangentRecursivePlanner {
    config: RecursiveConfig,
    model: CollisionModel,
}

impl TangentRecursivePlanner {
    /// Create a new recursive planner.
    pub fn new(config: RecursiveConfig, model: CollisionModel) -> Self {
        Self { config, model }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Planner configuration.
    pub fn config(&self) -> &RecursiveConfig {
        &self.config
    }

    /// Search for a route, `None` when no tangent route exists.
    pub fn find_path(&self, request: &PlanRequest<'_>) -> Option<Vec<Waypoint>> {
        let robot = request.robot();
        let flags = request.obstacle_flags();
        let problem = Problem {
            world: request.world,
            flags,
            obstacles: obstacle_circles(request.world, flags, &self.model),
            destination: request.destination,
        };

        trace!(
            "[TangentRecursive] find_path: start={} goal={} obstacles={}",
            robot.position,
            problem.destination,
            problem.obstacles.len()
        );

        let mut ctx = SearchContext::default();
        let path = self.solve(&mut ctx, &problem, robot.position, robot.angle, 0);

        match &path {
            Some(p) => debug!(
                "[TangentRecursive] Found {} legs, cost {:.1}cm ({} nodes)",
                p.len(),
                p[0].cost_to_destination(),
                ctx.nodes_expanded
            ),
            None => debug!(
                "[TangentRecursive] FAILED: no route to {} ({} nodes)",
                problem.destination, ctx.nodes_expanded
            ),
        }
        path
    }

    fn solve(
        &self,
        ctx: &mut SearchContext,
        problem: &Problem<'_>,
        point: Vector2D,
        heading: f64,
        depth: usize,
    ) -> Option<Vec<Waypoint>> {
        ctx.nodes_expanded += 1;
        let pitch = &problem.world.pitch;
        let destination = problem.destination;
        let adjusted = push_out_of_obstacles(&problem.obstacles, point, self.config.collision_margin);

        if !pitch.contains(adjusted) || !pitch.contains(destination) {
            trace!("[TangentRecursive] {} or goal off the pitch", adjusted);
            return None;
        }
        if depth >= self.config.max_depth {
            trace!("[TangentRecursive] depth limit at {}", adjusted);
            return None;
        }

        if is_direct_path_clear(problem.world, adjusted, destination, problem.flags, &self.model) {
            return Some(vec![Waypoint::new(
                point,
                heading,
                destination,
                point.distance(&destination),
                true,
            )]);
        }

        if self.config.use_memoization {
            if let Some(cached) = ctx.lookup(adjusted) {
                trace!("[TangentRecursive] memo hit at {}", adjusted);
                return cached
                    .waypoints
                    .as_ref()
                    .map(|path| splice(path, point, heading));
            }
        }

        let region = Circle::new(adjusted, self.config.region_radius);
        ctx.checked.push(region);

        let mut best: Option<(f64, Vec<Waypoint>)> = None;
        for obstacle in &problem.obstacles {
            let Some((left, right)) = circle_tangent_points(obstacle, adjusted) else {
                continue;
            };

            for tangent in [left, right] {
                let tangent = change_point_distance_to_circle(
                    obstacle,
                    tangent,
                    obstacle.radius() + self.config.collision_margin,
                );

                if !pitch.contains_padded(tangent, self.config.pitch_padding)
                    || inside_any(&problem.obstacles, tangent)
                    || ctx.is_checked(tangent)
                    || !is_direct_path_clear(problem.world, adjusted, tangent, problem.flags, &self.model)
                {
                    continue;
                }

                // The leg is driven from `point`, even when the search ran from `adjusted`
                let leg = tangent - point;
                let Some(mut rest) = self.solve(ctx, problem, tangent, leg.direction(), depth + 1) else {
                    continue;
                };

                let cost = leg.length() + rest[0].cost_to_destination();
                if best.as_ref().map_or(true, |(c, _)| cost < *c) {
                    rest.insert(0, Waypoint::new(point, heading, tangent, cost, false));
                    best = Some((cost, rest));
                }
            }
        }

        ctx.checked.pop();

        let path = best.map(|(_, p)| p);
        if self.config.use_memoization {
            ctx.memo.push(PartialPath {
                region,
                waypoints: path.clone(),
            });
        }
        path
    }
}

/// Reuse a cached route from a nearby point: the first leg is rebuilt to
/// start at `point`, the rest is kept.
fn splice(cached: &[Waypoint], point: Vector2D, heading: f64) -> Vec<Waypoint> {
    let mut path = cached.to_vec();
    let first_target = cached[0].target();
    let rest = cached.get(1).map_or(0.0, Waypoint::cost_to_destination);
    path[0] = Waypoint::new(
        point,
        heading,
        first_target,
        point.distance(&first_target) + rest,
        cached.len() == 1,
    );
    path
}

impl Pathfinder for TangentRecursivePlanner {
    fn name(&self) -> &'static str {
        "tangent_recursive"
    }

    fn plan(&self, request: &PlanRequest<'_>) -> PathResult {
        self.find_path(request).into()
    }
}
