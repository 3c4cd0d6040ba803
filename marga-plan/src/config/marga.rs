//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::{
    HeuristicConfig, HeuristicPlanner, Pathfinder, PlannerChain, RecursiveConfig, TangentPairConfig,
    TangentPairPlanner, TangentRecursivePlanner,
};
use crate::query::CollisionModel;

use super::collision::{CorridorSection, ObstacleSection, RobotSection};
use super::error::ConfigLoadError;
use super::planner::{PlannerSection, Strategy};

/// Full planner configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Planning robot footprint
    #[serde(default)]
    pub robot: RobotSection,

    /// Obstacle sizes
    #[serde(default)]
    pub obstacles: ObstacleSection,

    /// Corridor visibility test
    #[serde(default)]
    pub corridor: CorridorSection,

    /// Strategy settings
    #[serde(default)]
    pub planner: PlannerSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: MargaConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigLoadError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigLoadError::Invalid(format!("{} must be positive, got {}", name, value)))
            }
        }
        fn non_negative(name: &str, value: f64) -> Result<(), ConfigLoadError> {
            if value >= 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigLoadError::Invalid(format!("{} must not be negative, got {}", name, value)))
            }
        }
        fn at_least_one(name: &str, value: usize) -> Result<(), ConfigLoadError> {
            if value >= 1 {
                Ok(())
            } else {
                Err(ConfigLoadError::Invalid(format!("{} must be at least 1", name)))
            }
        }

        positive("robot.length", self.robot.length)?;
        positive("robot.width", self.robot.width)?;
        non_negative("obstacles.ball_radius", self.obstacles.ball_radius)?;
        non_negative("obstacles.robot_radius", self.obstacles.robot_radius)?;
        if let Some(padding) = self.obstacles.padding {
            non_negative("obstacles.padding", padding)?;
        }

        if self.corridor.width_fractions.is_empty() {
            return Err(ConfigLoadError::Invalid(
                "corridor.width_fractions must not be empty".into(),
            ));
        }
        for &fraction in &self.corridor.width_fractions {
            non_negative("corridor.width_fractions", fraction)?;
        }
        non_negative("corridor.tolerance", self.corridor.tolerance)?;

        let heuristic = &self.planner.heuristic;
        at_least_one("planner.heuristic.sector_count", heuristic.sector_count)?;
        at_least_one("planner.heuristic.max_iterations", heuristic.max_iterations)?;
        if let Some(step) = heuristic.distance_step {
            positive("planner.heuristic.distance_step", step)?;
        }

        let recursive = &self.planner.recursive;
        at_least_one("planner.recursive.max_depth", recursive.max_depth)?;
        non_negative("planner.recursive.collision_margin", recursive.collision_margin)?;
        non_negative("planner.recursive.region_radius", recursive.region_radius)?;
        if let Some(padding) = recursive.pitch_padding {
            non_negative("planner.recursive.pitch_padding", padding)?;
        }

        let tangent_pair = &self.planner.tangent_pair;
        if let Some(inflation) = tangent_pair.obstacle_inflation {
            non_negative("planner.tangent_pair.obstacle_inflation", inflation)?;
        }
        non_negative("planner.tangent_pair.collision_margin", tangent_pair.collision_margin)?;
        if let Some(padding) = tangent_pair.pitch_padding {
            non_negative("planner.tangent_pair.pitch_padding", padding)?;
        }

        Ok(())
    }

    /// Collision model shared by every planner.
    ///
    /// Padding follows `robot.length` unless set explicitly.
    pub fn collision_model(&self) -> CollisionModel {
        let derived = CollisionModel::for_robot(self.robot.length, self.robot.width);
        CollisionModel {
            ball_radius: self.obstacles.ball_radius,
            robot_radius: self.obstacles.robot_radius,
            padding: self.obstacles.padding.unwrap_or(derived.padding),
            robot_width: self.robot.width,
            corridor_fractions: self.corridor.width_fractions.clone(),
            tolerance: self.corridor.tolerance,
        }
    }

    /// Convert to HeuristicConfig
    pub fn heuristic_config(&self) -> HeuristicConfig {
        let s = &self.planner.heuristic;
        let derived = HeuristicConfig::for_robot_length(self.robot.length);
        HeuristicConfig {
            sector_count: s.sector_count,
            max_iterations: s.max_iterations,
            distance_step: s.distance_step.unwrap_or(derived.distance_step),
        }
    }

    /// Convert to RecursiveConfig
    pub fn recursive_config(&self) -> RecursiveConfig {
        let s = &self.planner.recursive;
        let derived = RecursiveConfig::for_robot_length(self.robot.length);
        RecursiveConfig {
            max_depth: s.max_depth,
            collision_margin: s.collision_margin,
            region_radius: s.region_radius,
            use_memoization: s.use_memoization,
            pitch_padding: s.pitch_padding.unwrap_or(derived.pitch_padding),
        }
    }

    /// Convert to TangentPairConfig
    pub fn tangent_pair_config(&self) -> TangentPairConfig {
        let s = &self.planner.tangent_pair;
        let derived = TangentPairConfig::for_robot_length(self.robot.length);
        TangentPairConfig {
            obstacle_inflation: s.obstacle_inflation.unwrap_or(derived.obstacle_inflation),
            collision_margin: s.collision_margin,
            pitch_padding: s.pitch_padding.unwrap_or(derived.pitch_padding),
        }
    }

    /// The standard recursive → tangent-pair → heuristic chain
    pub fn planner_chain(&self) -> PlannerChain {
        PlannerChain::standard(
            self.collision_model(),
            self.recursive_config(),
            self.tangent_pair_config(),
            self.heuristic_config(),
        )
    }

    /// Build the configured strategy
    pub fn build_planner(&self) -> Box<dyn Pathfinder> {
        let model = self.collision_model();
        match self.planner.strategy {
            Strategy::Heuristic => Box::new(HeuristicPlanner::new(self.heuristic_config(), model)),
            Strategy::Recursive => {
                Box::new(TangentRecursivePlanner::new(self.recursive_config(), model))
            }
            Strategy::TangentPair => {
                Box::new(TangentPairPlanner::new(self.tangent_pair_config(), model))
            }
            Strategy::Chain => Box::new(self.planner_chain()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MargaConfig::default();
        assert_eq!(config.robot.length, 20.0);
        assert_eq!(config.planner.heuristic.sector_count, 62);
        assert_eq!(config.planner.recursive.max_depth, 10);
        assert_eq!(config.planner.strategy, Strategy::Chain);
        assert!(config.validate().is_ok());
        assert_eq!(config.collision_model(), CollisionModel::default());
        assert_eq!(config.heuristic_config(), HeuristicConfig::default());
        assert_eq!(config.recursive_config(), RecursiveConfig::default());
        assert_eq!(config.tangent_pair_config(), TangentPairConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
planner:
  strategy: tangent_pair
  recursive:
    max_depth: 4
"#;
        let config = MargaConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.planner.strategy, Strategy::TangentPair);
        assert_eq!(config.planner.recursive.max_depth, 4);
        // Unspecified values keep their defaults
        assert_eq!(config.planner.recursive.collision_margin, 5.0);
        assert_eq!(config.obstacles.padding, None);
        assert_eq!(config.collision_model().padding, 10.0);
        assert_eq!(config.build_planner().name(), "tangent_pair");
    }

    #[test]
    fn test_robot_length_scales_clearances() {
        let config = MargaConfig::from_yaml("robot:\n  length: 60.0\n").unwrap();

        assert_eq!(config.collision_model().padding, 30.0);
        assert_eq!(config.heuristic_config().distance_step, 60.0);
        assert_eq!(config.recursive_config().pitch_padding, 30.0);
        assert_eq!(config.tangent_pair_config().obstacle_inflation, 42.0);
        assert_eq!(config.tangent_pair_config().pitch_padding, 30.0);

        // Explicit values still win
        let yaml = "robot:\n  length: 60.0\nobstacles:\n  padding: 10.0\nplanner:\n  tangent_pair:\n    obstacle_inflation: 14.0\n";
        let config = MargaConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.collision_model().padding, 10.0);
        assert_eq!(config.tangent_pair_config().obstacle_inflation, 14.0);
        assert_eq!(config.recursive_config().pitch_padding, 30.0);
    }

    #[test]
    fn test_robot_length_changes_plan() {
        use crate::core::Vector2D;
        use crate::pathfinding::PlanRequest;
        use crate::world::{Robot, Team, WorldState};

        let yellow = Vector2D::new(120.0, 56.85);
        let world = WorldState::new(
            Vector2D::new(122.0, 100.0),
            Robot::new(Vector2D::new(20.0, 56.85), 0.0),
            Robot::new(yellow, 0.0),
        );
        let req = PlanRequest::new(&world, Team::Blue, Vector2D::new(220.0, 56.85), true);

        let mut short = MargaConfig::default();
        short.planner.strategy = Strategy::Recursive;
        let mut long = MargaConfig::from_yaml("robot:\n  length: 60.0\n").unwrap();
        long.planner.strategy = Strategy::Recursive;

        let short_plan = short.build_planner().plan(&req);
        let long_plan = long.build_planner().plan(&req);
        assert!(short_plan.is_path());
        assert_ne!(short_plan, long_plan);

        // Any route the longer robot gets keeps the wider clearance
        if let Some(waypoints) = long_plan.waypoints() {
            let padded = long.obstacles.robot_radius + 30.0;
            assert!(waypoints[0].target().distance(&yellow) >= padded);
        }
    }

    #[test]
    fn test_roundtrip() {
        let config = MargaConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = MargaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.collision_model(), config.collision_model());
        assert_eq!(parsed.planner.strategy, config.planner.strategy);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = MargaConfig::from_yaml("robot:\n  width: -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));

        let err = MargaConfig::from_yaml("planner:\n  heuristic:\n    sector_count: 0\n").unwrap_err();
        assert!(err.to_string().contains("sector_count"));

        let err = MargaConfig::from_yaml("corridor:\n  width_fractions: []\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = MargaConfig::from_yaml("planner:\n  strategy: teleport\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_build_each_strategy() {
        for (strategy, name) in [
            (Strategy::Heuristic, "heuristic"),
            (Strategy::Recursive, "tangent_recursive"),
            (Strategy::TangentPair, "tangent_pair"),
            (Strategy::Chain, "fallback"),
        ] {
            let mut config = MargaConfig::default();
            config.planner.strategy = strategy;
            assert_eq!(config.build_planner().name(), name);
        }
    }
}
