//! Greedy sector-scan planner.
//!
//! Looks one step ahead: if the destination is not directly reachable it
//! picks the open direction closest to the destination bearing. It always
//! produces a waypoint, which makes it the last strategy of every chain.

use log::{debug, trace};

use crate::core::math::normalise_angle;
use crate::core::Vector2D;
use crate::query::{is_direct_path_clear, CollisionModel};
use crate::world::{ObstacleFlags, Robot, WorldState, ROBOT_LENGTH_CM};

use super::pathfinder::Pathfinder;
use super::request::{PathResult, PlanRequest};
use super::waypoint::Waypoint;

/// Heuristic planner configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicConfig {
    /// Number of equal angular sectors scanned around the robot
    pub sector_count: usize,
    /// Scan rounds before giving up, each with a shorter candidate ray
    pub max_iterations: usize,
    /// How much the candidate ray shrinks between rounds (cm)
    pub distance_step: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self::for_robot_length(ROBOT_LENGTH_CM)
    }
}

impl HeuristicConfig {
    /// Default scan with the candidate ray shrinking by one robot length
    /// per round.
    pub fn for_robot_length(length: f64) -> Self {
        Self {
            sector_count: 62,
            max_iterations: 5,
            distance_step: length,
        }
    }

    /// Angular size of one sector (degrees).
    #[inline]
    pub fn sector_angle(&self) -> f64 {
        360.0 / self.sector_count.max(1) as f64
    }
}

/// Single-step sector-scan planner. Never fails.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPlanner {
    config: HeuristicConfig,
    model: CollisionModel,
}

impl HeuristicPlanner {
    /// Create a new heuristic planner.
    pub fn new(config: HeuristicConfig, model: CollisionModel) -> Self {
        Self { config, model }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Planner configuration.
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Pick the next waypoint towards the destination.
    pub fn waypoint(&self, request: &PlanRequest<'_>) -> Waypoint {
        let world = request.world;
        let robot = request.robot();
        let flags = request.obstacle_flags();
        let target = request.destination;
        let target_local = robot.to_local(target);

        if is_direct_path_clear(world, robot.position, target, flags, &self.model) {
            debug!("[Heuristic] Direct path to {}", target);
            return Waypoint::new(robot.position, robot.angle, target, target_local.length(), true);
        }

        let target_bearing = target_local.direction();
        let mut candidate_distance = target_local.length();

        for iteration in 0..self.config.max_iterations {
            if candidate_distance <= 0.0 {
                break;
            }

            if let Some(ray) = self.best_sector(world, robot, flags, candidate_distance, target_bearing) {
                debug!(
                    "[Heuristic] Sector at {:.1}° open for {:.1}cm (round {})",
                    ray.direction(),
                    candidate_distance,
                    iteration + 1
                );
                return Waypoint::local(robot.position, robot.angle, ray, ray.length(), false);
            }

            trace!(
                "[Heuristic] No open sector at {:.1}cm, shrinking",
                candidate_distance
            );
            candidate_distance -= self.config.distance_step;
        }

        debug!(
            "[Heuristic] Boxed in, heading straight for {} anyway",
            target
        );
        Waypoint::new(robot.position, robot.angle, target, target_local.length(), false)
    }

    /// Local-frame ray of the open sector closest to `target_bearing`.
    fn best_sector(
        &self,
        world: &WorldState,
        robot: &Robot,
        flags: ObstacleFlags,
        distance: f64,
        target_bearing: f64,
    ) -> Option<Vector2D> {
        let sector = self.config.sector_angle();
        let mut best: Option<(f64, Vector2D)> = None;

        for i in 0..self.config.sector_count {
            let bisector = normalise_angle(-90.0 + i as f64 * sector + sector / 2.0);
            let ray_local = Vector2D::from_direction(bisector).with_length(distance);
            let ray_end = robot.to_global(ray_local);

            if !is_direct_path_clear(world, robot.position, ray_end, flags, &self.model) {
                continue;
            }

            let deviation = normalise_angle(bisector - target_bearing).abs();
            if best.map_or(true, |(d, _)| deviation < d) {
                best = Some((deviation, ray_local));
            }
        }

        best.map(|(_, ray)| ray)
    }
}

impl Pathfinder for HeuristicPlanner {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn plan(&self, request: &PlanRequest<'_>) -> PathResult {
        PathResult::Path(vec![self.waypoint(request)])
    }
}
