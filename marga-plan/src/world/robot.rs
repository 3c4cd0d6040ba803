//! Robot pose and rectangular footprint.
//!
//! A robot's local frame has +X pointing forward. Angles follow the
//! screen-space convention used everywhere on the pitch: degrees,
//! counter-clockwise on screen, normalised to [-180, 180).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::geometry::{is_point_in_quadrilateral, position_rectangle};
use crate::core::math::{angle_diff, normalise_angle};
use crate::core::Vector2D;

/// Robot length along its heading (cm).
pub const ROBOT_LENGTH_CM: f64 = 20.0;
/// Robot width across its heading (cm).
pub const ROBOT_WIDTH_CM: f64 = 18.0;

/// Team colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Blue team
    Blue,
    /// Yellow team
    Yellow,
}

impl Team {
    /// The other team.
    #[inline]
    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Yellow,
            Team::Yellow => Team::Blue,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Blue => write!(f, "blue"),
            Team::Yellow => write!(f, "yellow"),
        }
    }
}

/// A robot on the pitch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RobotRecord")]
pub struct Robot {
    /// Centre of the footprint (cm)
    pub position: Vector2D,
    /// Heading in degrees, [-180, 180)
    pub angle: f64,
    /// Footprint length (cm)
    pub length: f64,
    /// Footprint width (cm)
    pub width: f64,
}

/// On-disk form of [`Robot`]; dimensions are optional and the angle is
/// normalised on load.
#[derive(Deserialize)]
struct RobotRecord {
    position: Vector2D,
    #[serde(default)]
    angle: f64,
    #[serde(default = "default_length")]
    length: f64,
    #[serde(default = "default_width")]
    width: f64,
}

fn default_length() -> f64 {
    ROBOT_LENGTH_CM
}

fn default_width() -> f64 {
    ROBOT_WIDTH_CM
}

impl From<RobotRecord> for Robot {
    fn from(r: RobotRecord) -> Self {
        Robot::with_dimensions(r.position, r.angle, r.length, r.width)
    }
}

impl Robot {
    /// Create a robot with the standard footprint.
    #[inline]
    pub fn new(position: Vector2D, angle: f64) -> Self {
        Self::with_dimensions(position, angle, ROBOT_LENGTH_CM, ROBOT_WIDTH_CM)
    }

    /// Create a robot with a custom footprint.
    #[inline]
    pub fn with_dimensions(position: Vector2D, angle: f64, length: f64, width: f64) -> Self {
        Self {
            position,
            angle: normalise_angle(angle),
            length,
            width,
        }
    }

    /// Footprint corners: front-left, front-right, back-right, back-left.
    #[inline]
    pub fn corners(&self) -> [Vector2D; 4] {
        position_rectangle(self.length, self.width, self.position, self.angle)
    }

    /// Express a global point in this robot's frame.
    #[inline]
    pub fn to_local(&self, point: Vector2D) -> Vector2D {
        (point - self.position).rotate(-self.angle)
    }

    /// Express a point given in this robot's frame in global coordinates.
    #[inline]
    pub fn to_global(&self, local: Vector2D) -> Vector2D {
        local.rotate(self.angle) + self.position
    }

    /// Whether the point lies on the footprint.
    pub fn is_point_inside(&self, point: Vector2D) -> bool {
        let [fl, fr, br, bl] = self.corners();
        is_point_in_quadrilateral(point, fl, fr, br, bl)
    }

    /// Signed turn (degrees) needed to face `point`.
    #[inline]
    pub fn turning_angle_to(&self, point: Vector2D) -> f64 {
        angle_diff(self.angle, (point - self.position).direction())
    }
}
