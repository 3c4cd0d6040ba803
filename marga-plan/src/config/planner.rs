//! Planner configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which strategy [`MargaConfig::build_planner`](super::MargaConfig::build_planner) returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Heuristic sector scan only
    Heuristic,
    /// Tangent-recursive search, no fallback
    Recursive,
    /// Tangent-pair search, no fallback
    TangentPair,
    /// Recursive, then tangent-pair, then heuristic
    #[default]
    Chain,
}

/// Planner settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PlannerSection {
    /// Strategy to build
    #[serde(default)]
    pub strategy: Strategy,

    /// Heuristic planner settings
    #[serde(default)]
    pub heuristic: HeuristicSettings,

    /// Tangent-recursive planner settings
    #[serde(default)]
    pub recursive: RecursiveSettings,

    /// Tangent-pair planner settings
    #[serde(default)]
    pub tangent_pair: TangentPairSettings,
}

/// Heuristic planner settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeuristicSettings {
    /// Angular sectors scanned around the robot
    #[serde(default = "defaults::sector_count")]
    pub sector_count: usize,

    /// Scan rounds, each with a shorter candidate ray
    #[serde(default = "defaults::heuristic_iterations")]
    pub max_iterations: usize,

    /// Candidate ray shrink per round (cm); the robot length when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_step: Option<f64>,
}

impl Default for HeuristicSettings {
    fn default() -> Self {
        Self {
            sector_count: defaults::sector_count(),
            max_iterations: defaults::heuristic_iterations(),
            distance_step: None,
        }
    }
}

/// Tangent-recursive planner settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecursiveSettings {
    /// Recursion depth limit
    #[serde(default = "defaults::max_depth")]
    pub max_depth: usize,

    /// Push-out distance beyond obstacle boundaries (cm)
    #[serde(default = "defaults::recursive_margin")]
    pub collision_margin: f64,

    /// Checked/memoized region radius (cm)
    #[serde(default = "defaults::region_radius")]
    pub region_radius: f64,

    /// Reuse answers for solved regions
    #[serde(default = "defaults::enabled")]
    pub use_memoization: bool,

    /// Minimum tangent point distance from the walls (cm); half the robot
    /// length when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_padding: Option<f64>,
}

impl Default for RecursiveSettings {
    fn default() -> Self {
        Self {
            max_depth: defaults::max_depth(),
            collision_margin: defaults::recursive_margin(),
            region_radius: defaults::region_radius(),
            use_memoization: true,
            pitch_padding: None,
        }
    }
}

/// Tangent-pair planner settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TangentPairSettings {
    /// Extra obstacle radius (cm); 0.7 robot lengths when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obstacle_inflation: Option<f64>,

    /// Push-out distance beyond inflated obstacles (cm)
    #[serde(default = "defaults::tangent_pair_margin")]
    pub collision_margin: f64,

    /// Minimum corner distance from the walls (cm); half the robot length
    /// when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_padding: Option<f64>,
}

impl Default for TangentPairSettings {
    fn default() -> Self {
        Self {
            obstacle_inflation: None,
            collision_margin: defaults::tangent_pair_margin(),
            pitch_padding: None,
        }
    }
}
