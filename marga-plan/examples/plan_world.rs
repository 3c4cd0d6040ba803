//! Plan a route on a saved world snapshot.
//!
//! Loads a world YAML, plans for one robot and prints the waypoints. With
//! `--steps` the robot is moved onto each waypoint in turn and the planner
//! is re-run, the way a control loop would use it.
//!
//! Usage:
//!   cargo run --example plan_world -- --world worlds/blocked.yaml --x 220 --y 56.85
//!   cargo run --example plan_world -- --world worlds/open_pitch.yaml --team yellow --x 20 --y 56.85 --steps 5
//!   RUST_LOG=debug cargo run --example plan_world -- --world worlds/blocked.yaml --x 120 --y 56.85

use std::path::Path;

use clap::{Parser, ValueEnum};
use marga_plan::{MargaConfig, PathResult, PlanRequest, Robot, Team, Vector2D, WorldState};

/// Planning robot
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TeamArg {
    Blue,
    Yellow,
}

impl From<TeamArg> for Team {
    fn from(arg: TeamArg) -> Self {
        match arg {
            TeamArg::Blue => Team::Blue,
            TeamArg::Yellow => Team::Yellow,
        }
    }
}

/// Plan a route on a world snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World snapshot YAML
    #[arg(short, long, default_value = "worlds/open_pitch.yaml")]
    world: String,

    /// Planner configuration YAML (built-in defaults when absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Planning robot
    #[arg(short, long, value_enum, default_value = "blue")]
    team: TeamArg,

    /// Destination X (cm)
    #[arg(long)]
    x: f64,

    /// Destination Y (cm)
    #[arg(long)]
    y: f64,

    /// Drive around the ball instead of through it
    #[arg(long)]
    ball: bool,

    /// Follow the plan for this many legs, replanning after each
    #[arg(long, default_value = "0")]
    steps: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let team = Team::from(args.team);

    let config = match &args.config {
        Some(path) => MargaConfig::load(Path::new(path)),
        None => MargaConfig::load_default(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let mut world = match WorldState::load(Path::new(&args.world)) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world {}: {}", args.world, e);
            std::process::exit(1);
        }
    };

    let planner = config.build_planner();
    let destination = Vector2D::new(args.x, args.y);

    println!("Planner:     {}", planner.name());
    println!("Robot:       {} at {} facing {:.1}°", team, world.robot(team).position, world.robot(team).angle);
    println!("Destination: {}", destination);
    println!();

    for step in 0..=args.steps {
        let request = PlanRequest::new(&world, team, destination, args.ball);
        let result = planner.plan(&request);

        let waypoints = match &result {
            PathResult::Path(w) => w.clone(),
            PathResult::NoPath => {
                println!("step {}: no path", step);
                break;
            }
        };

        println!(
            "step {}: {} legs, cost {:.1}cm",
            step,
            waypoints.len(),
            result.cost().unwrap_or(0.0)
        );
        for (i, wp) in waypoints.iter().enumerate() {
            println!("  {:2}. {}", i + 1, wp);
        }

        let Some(first) = waypoints.first() else {
            break;
        };
        if step == args.steps {
            break;
        }

        // Drive the first leg: arrive at its target facing along it
        let robot = world.robot(team);
        let moved = Robot::with_dimensions(
            first.target(),
            (first.target() - first.origin()).direction(),
            robot.length,
            robot.width,
        );
        match team {
            Team::Blue => world.blue = moved,
            Team::Yellow => world.yellow = moved,
        }
        if first.is_endpoint() {
            println!("Reached destination");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(["plan_world", "--x", "220", "--y", "56.85"].iter().chain(args))
    }

    #[test]
    fn test_team_flag() {
        assert_eq!(parse(&[]).unwrap().team, TeamArg::Blue);
        let args = parse(&["--team", "yellow"]).unwrap();
        assert_eq!(Team::from(args.team), Team::Yellow);
        assert!(parse(&["--team", "green"]).is_err());
    }
}
