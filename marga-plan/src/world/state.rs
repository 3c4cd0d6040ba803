//! Per-tick world snapshot and obstacle selection flags.

use std::fmt;
use std::ops::BitOr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::WorldLoadError;
use super::pitch::Pitch;
use super::robot::{Robot, Team};
use crate::core::Vector2D;

/// Selects which world entities count as obstacles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObstacleFlags(u8);

impl ObstacleFlags {
    /// Nothing is an obstacle
    pub const NONE: Self = Self(0x0);
    /// The ball
    pub const BALL: Self = Self(0x1);
    /// The blue robot
    pub const BLUE: Self = Self(0x2);
    /// The yellow robot
    pub const YELLOW: Self = Self(0x4);

    /// Raw bit pattern.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set.
    #[inline]
    pub fn contains(self, other: ObstacleFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flag for a team's robot.
    #[inline]
    pub fn robot(team: Team) -> Self {
        match team {
            Team::Blue => Self::BLUE,
            Team::Yellow => Self::YELLOW,
        }
    }

    /// Obstacles seen by a robot of `own_team`: the opposing robot, plus
    /// the ball when requested. The robot never avoids itself.
    #[inline]
    pub fn for_opponent(ball_is_obstacle: bool, own_team: Team) -> Self {
        let robot = Self::robot(own_team.opponent());
        if ball_is_obstacle {
            robot | Self::BALL
        } else {
            robot
        }
    }
}

impl BitOr for ObstacleFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for ObstacleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (Self::BALL, "ball"),
            (Self::BLUE, "blue"),
            (Self::YELLOW, "yellow"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}

/// Immutable snapshot of the pitch for one planning call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Ball position (cm)
    pub ball: Vector2D,
    /// Blue robot
    pub blue: Robot,
    /// Yellow robot
    pub yellow: Robot,
    /// Pitch bounds
    #[serde(default)]
    pub pitch: Pitch,
}

impl WorldState {
    /// Create a snapshot on the standard pitch.
    pub fn new(ball: Vector2D, blue: Robot, yellow: Robot) -> Self {
        Self {
            ball,
            blue,
            yellow,
            pitch: Pitch::default(),
        }
    }

    /// The robot of `team`.
    #[inline]
    pub fn robot(&self, team: Team) -> &Robot {
        match team {
            Team::Blue => &self.blue,
            Team::Yellow => &self.yellow,
        }
    }

    /// Load a snapshot from a YAML file.
    pub fn load(path: &Path) -> Result<Self, WorldLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a snapshot from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, WorldLoadError> {
        let world: WorldState = serde_yaml::from_str(yaml)?;
        world.validate()?;
        Ok(world)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, WorldLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the snapshot to a YAML file.
    pub fn save(&self, path: &Path) -> Result<(), WorldLoadError> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Reject snapshots no planner can work with.
    pub fn validate(&self) -> Result<(), WorldLoadError> {
        let values = [
            self.ball.x,
            self.ball.y,
            self.blue.position.x,
            self.blue.position.y,
            self.blue.angle,
            self.yellow.position.x,
            self.yellow.position.y,
            self.yellow.angle,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(WorldLoadError::Invalid("non-finite coordinate".into()));
        }
        if !(self.pitch.width > 0.0 && self.pitch.height > 0.0) {
            return Err(WorldLoadError::Invalid(format!(
                "pitch must have positive size, got {} x {}",
                self.pitch.width, self.pitch.height
            )));
        }
        for (team, robot) in [(Team::Blue, &self.blue), (Team::Yellow, &self.yellow)] {
            if !(robot.length > 0.0 && robot.width > 0.0) {
                return Err(WorldLoadError::Invalid(format!(
                    "{} robot footprint must be positive",
                    team
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_for_opponent() {
        let flags = ObstacleFlags::for_opponent(true, Team::Blue);
        assert!(flags.contains(ObstacleFlags::BALL));
        assert!(flags.contains(ObstacleFlags::YELLOW));
        assert!(!flags.contains(ObstacleFlags::BLUE));
        assert_eq!(flags.bits(), 0x5);

        let flags = ObstacleFlags::for_opponent(false, Team::Yellow);
        assert_eq!(flags, ObstacleFlags::BLUE);
        assert_eq!(flags.to_string(), "blue");
        assert_eq!(ObstacleFlags::NONE.to_string(), "none");
    }

    #[test]
    fn test_world_from_yaml_defaults() {
        let yaml = r#"
ball: { x: 100.0, y: 50.0 }
blue:
  position: { x: 20.0, y: 56.85 }
yellow:
  position: { x: 200.0, y: 56.85 }
  angle: 540.0
"#;
        let world = WorldState::from_yaml(yaml).unwrap();
        assert_eq!(world.pitch, Pitch::default());
        assert_eq!(world.blue.length, 20.0);
        assert_eq!(world.blue.width, 18.0);
        assert_eq!(world.yellow.angle, -180.0);
        assert_eq!(world.robot(Team::Yellow).position.x, 200.0);
    }

    #[test]
    fn test_world_yaml_round_trip() {
        let world = WorldState::new(
            Vector2D::new(122.0, 56.85),
            Robot::new(Vector2D::new(20.0, 56.85), 0.0),
            Robot::new(Vector2D::new(220.0, 56.85), 180.0),
        );
        let parsed = WorldState::from_yaml(&world.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, world);
    }

    #[test]
    fn test_world_rejects_bad_pitch() {
        let yaml = r#"
ball: { x: 100.0, y: 50.0 }
blue: { position: { x: 20.0, y: 56.85 } }
yellow: { position: { x: 200.0, y: 56.85 } }
pitch: { width: 0.0, height: 113.7 }
"#;
        assert!(matches!(WorldState::from_yaml(yaml), Err(WorldLoadError::Invalid(_))));
    }

    #[test]
    fn test_world_rejects_malformed_yaml() {
        assert!(matches!(WorldState::from_yaml("ball: [1, 2"), Err(WorldLoadError::Parse(_))));
    }
}
