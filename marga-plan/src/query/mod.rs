//! Obstacle and visibility queries against a world snapshot.
//!
//! - **Obstacles**: padded circles for the entities selected by [`ObstacleFlags`](crate::world::ObstacleFlags)
//! - **Raycast**: distance to the first wall, ball or robot along a ray
//! - **Corridor**: whether the robot's whole width can drive straight to a point

pub mod corridor;
pub mod obstacles;
pub mod raycast;

pub use corridor::{is_direct_path_clear, side_collisions};
pub use obstacles::{inside_any, obstacle_circles, CollisionModel};
pub use raycast::{closest_collision, closest_collision_detailed, Blocker, RaycastResult};
