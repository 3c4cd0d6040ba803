//! Robot, obstacle and corridor sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Planning robot footprint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotSection {
    /// Length along the heading (cm)
    #[serde(default = "defaults::robot_length")]
    pub length: f64,

    /// Width across the heading (cm)
    #[serde(default = "defaults::robot_width")]
    pub width: f64,
}

impl Default for RobotSection {
    fn default() -> Self {
        Self {
            length: defaults::robot_length(),
            width: defaults::robot_width(),
        }
    }
}

/// Obstacle circle sizes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObstacleSection {
    /// Ball radius (cm)
    #[serde(default = "defaults::ball_radius")]
    pub ball_radius: f64,

    /// Opposing robot radius (cm)
    #[serde(default = "defaults::robot_radius")]
    pub robot_radius: f64,

    /// Added to every obstacle radius (cm); half the robot length when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl Default for ObstacleSection {
    fn default() -> Self {
        Self {
            ball_radius: defaults::ball_radius(),
            robot_radius: defaults::robot_radius(),
            padding: None,
        }
    }
}

/// Swept-corridor test settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorridorSection {
    /// Ray offsets as fractions of half the robot width
    #[serde(default = "defaults::corridor_fractions")]
    pub width_fractions: Vec<f64>,

    /// Allowed shortfall of a ray against the path length (cm)
    #[serde(default = "defaults::corridor_tolerance")]
    pub tolerance: f64,
}

impl Default for CorridorSection {
    fn default() -> Self {
        Self {
            width_fractions: defaults::corridor_fractions(),
            tolerance: defaults::corridor_tolerance(),
        }
    }
}
