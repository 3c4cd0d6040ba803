//! Path planning strategies.
//!
//! Three interchangeable strategies implement [`Pathfinder`]:
//!
//! - **Heuristic**: one-step sector scan, always answers
//! - **Tangent-recursive**: depth-bounded search over obstacle tangent points
//! - **Tangent-pair**: non-recursive polyline around at most two obstacles
//!
//! The tangent planners report [`PathResult::NoPath`] when they cannot build
//! a route; [`FallbackPlanner`] chains strategies so a caller always gets a
//! waypoint.
//!
//! ```rust,ignore
//! use marga_plan::pathfinding::{Pathfinder, PlanRequest, PlannerChain};
//!
//! let planner = PlannerChain::with_defaults();
//! let request = PlanRequest::new(&world, Team::Blue, goal, true);
//! if let Some(wp) = planner.next_waypoint(&request) {
//!     println!("turn {:.1}°, drive {:.1}cm", wp.bearing(), wp.distance());
//! }
//! ```

pub mod adjust;
pub mod fallback;
pub mod heuristic;
pub mod pathfinder;
pub mod recursive;
pub mod request;
pub mod tangent_pair;
pub mod waypoint;

pub use adjust::{path_length, push_out_of_obstacles};
pub use fallback::{FallbackPlanner, PlannerChain};
pub use heuristic::{HeuristicConfig, HeuristicPlanner};
pub use pathfinder::Pathfinder;
pub use recursive::{RecursiveConfig, TangentRecursivePlanner};
pub use request::{PathResult, PlanRequest};
pub use tangent_pair::{obstacle_tangents, ObstacleTangent, TangentPairConfig, TangentPairPlanner};
pub use waypoint::Waypoint;
