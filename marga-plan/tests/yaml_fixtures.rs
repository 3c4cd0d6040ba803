//! Shipped world snapshots and configuration files.

mod common;

use common::{fixture, init_logging, FAR_GOAL};
use marga_plan::config::Strategy;
use marga_plan::{MargaConfig, PlanRequest, Team, Vector2D, WorldLoadError, WorldState};

#[test]
fn test_shipped_config_matches_defaults() {
    let config = MargaConfig::load(&fixture("configs/marga.yaml")).unwrap();
    let defaults = MargaConfig::default();

    assert_eq!(config.planner.strategy, Strategy::Chain);
    assert_eq!(config.collision_model(), defaults.collision_model());
    assert_eq!(config.heuristic_config(), defaults.heuristic_config());
    assert_eq!(config.recursive_config(), defaults.recursive_config());
    assert_eq!(config.tangent_pair_config(), defaults.tangent_pair_config());
}

#[test]
fn test_world_files_load() {
    let open = WorldState::load(&fixture("worlds/open_pitch.yaml")).unwrap();
    let blocked = WorldState::load(&fixture("worlds/blocked.yaml")).unwrap();

    assert_eq!(open.pitch, blocked.pitch);
    assert_eq!(blocked.yellow.position, Vector2D::new(120.0, 56.85));
    assert_eq!(open.blue.length, 20.0);
}

#[test]
fn test_plan_from_files() {
    init_logging();
    let config = MargaConfig::load(&fixture("configs/marga.yaml")).unwrap();
    let planner = config.build_planner();

    let open = WorldState::load(&fixture("worlds/open_pitch.yaml")).unwrap();
    let wp = planner
        .next_waypoint(&PlanRequest::new(&open, Team::Blue, FAR_GOAL, true))
        .unwrap();
    assert!(wp.is_endpoint());

    let blocked = WorldState::load(&fixture("worlds/blocked.yaml")).unwrap();
    let wp = planner
        .next_waypoint(&PlanRequest::new(&blocked, Team::Blue, FAR_GOAL, true))
        .unwrap();
    assert!(!wp.is_endpoint());
    assert!(wp.target().y < blocked.blue.position.y);
}

#[test]
fn test_world_roundtrip_through_file() {
    let world = WorldState::load(&fixture("worlds/blocked.yaml")).unwrap();
    let path = std::env::temp_dir().join("marga_plan_roundtrip_world.yaml");
    world.save(&path).unwrap();
    let reloaded = WorldState::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(reloaded, world);
}

#[test]
fn test_missing_world_file() {
    let err = WorldState::load(&fixture("worlds/does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, WorldLoadError::Io(_)));
}
