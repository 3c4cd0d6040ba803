//! World snapshot consumed by the planners.
//!
//! The snapshot is produced upstream (vision) once per control tick and is
//! read-only here. It can also be loaded from YAML for offline replay.

mod error;
mod pitch;
mod robot;
mod state;

pub use error::WorldLoadError;
pub use pitch::{Pitch, PITCH_HEIGHT_CM, PITCH_WIDTH_CM};
pub use robot::{Robot, Team, ROBOT_LENGTH_CM, ROBOT_WIDTH_CM};
pub use state::{ObstacleFlags, WorldState};
