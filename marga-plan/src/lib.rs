//! # Marga-Plan: Obstacle-Tangent Path Planning for Pitch Robots
//!
//! Plans a collision-free route for a small two-wheeled robot on a
//! table-football pitch. Each control tick the caller hands over a world
//! snapshot (ball, both robots) and a destination, and gets back the next
//! waypoint to drive to.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga_plan::{PlannerChain, Pathfinder, PlanRequest, Robot, Team, Vector2D, WorldState};
//!
//! let world = WorldState::new(
//!     Vector2D::new(122.0, 100.0),
//!     Robot::new(Vector2D::new(20.0, 56.85), 0.0),
//!     Robot::new(Vector2D::new(120.0, 56.85), 0.0),
//! );
//! let planner = PlannerChain::with_defaults();
//! let request = PlanRequest::new(&world, Team::Blue, Vector2D::new(220.0, 56.85), true);
//! if let Some(wp) = planner.next_waypoint(&request) {
//!     println!("turn {:.1}°, drive {:.1}cm", wp.bearing(), wp.distance());
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! Screen convention, in centimetres:
//! - **X-right**: origin at the top-left corner of the pitch
//! - **Y-down**: positive Y points towards the bottom wall
//! - **Angles**: degrees, counter-clockwise on screen, `atan2(-y, x)`
//!
//! A robot-local frame has +X along the robot's heading.
//!
//! ## Architecture
//!
//! - [`core`]: vectors, circles, geometry kernel
//! - [`world`]: pitch, robots, world snapshot
//! - [`query`]: obstacle circles, raycasts, corridor visibility
//! - [`pathfinding`]: waypoints and the three planning strategies
//! - [`config`]: YAML configuration

pub mod config;
pub mod core;
pub mod pathfinding;
pub mod query;
pub mod world;

// Re-export commonly used types
pub use crate::config::{ConfigLoadError, MargaConfig};
pub use crate::core::{Circle, Vector2D};
pub use crate::pathfinding::{
    FallbackPlanner, HeuristicPlanner, PathResult, Pathfinder, PlanRequest, PlannerChain,
    TangentPairPlanner, TangentRecursivePlanner, Waypoint,
};
pub use crate::query::{is_direct_path_clear, CollisionModel};
pub use crate::world::{ObstacleFlags, Pitch, Robot, Team, WorldLoadError, WorldState};
