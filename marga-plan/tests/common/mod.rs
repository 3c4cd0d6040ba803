//! Shared world builders for integration tests.

#![allow(dead_code)]

use marga_plan::{Robot, Vector2D, WorldState};

/// Blue start used by every scenario.
pub const BLUE_START: Vector2D = Vector2D::new(20.0, 56.85);

/// Destination on the far side of the pitch.
pub const FAR_GOAL: Vector2D = Vector2D::new(220.0, 56.85);

/// Initialize logging once per test binary.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Blue facing +X at [`BLUE_START`], ball below the centre line.
pub fn world_with_yellow_at(yellow: Vector2D) -> WorldState {
    WorldState::new(
        Vector2D::new(122.0, 100.0),
        Robot::new(BLUE_START, 0.0),
        Robot::new(yellow, 0.0),
    )
}

/// Yellow well out of the way.
pub fn open_world() -> WorldState {
    world_with_yellow_at(Vector2D::new(120.0, 100.0))
}

/// Yellow parked on the straight line between blue and [`FAR_GOAL`].
pub fn blocked_world() -> WorldState {
    world_with_yellow_at(Vector2D::new(120.0, 56.85))
}

/// Path to a fixture under the crate root.
pub fn fixture(relative: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}
