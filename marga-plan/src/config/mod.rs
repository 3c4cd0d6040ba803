//! Unified configuration loading for MargaPlan.
//!
//! Loads all planner tunables from a single YAML file. Every field has a
//! default, so a partial (or empty) file is valid.

mod collision;
mod defaults;
mod error;
mod marga;
mod planner;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use collision::{CorridorSection, ObstacleSection, RobotSection};
pub use planner::{
    HeuristicSettings, PlannerSection, RecursiveSettings, Strategy, TangentPairSettings,
};
