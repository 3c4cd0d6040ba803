//! Strategy composition.

use log::debug;

use crate::query::CollisionModel;

use super::heuristic::{HeuristicConfig, HeuristicPlanner};
use super::pathfinder::Pathfinder;
use super::recursive::{RecursiveConfig, TangentRecursivePlanner};
use super::request::{PathResult, PlanRequest};
use super::tangent_pair::{TangentPairConfig, TangentPairPlanner};

/// Runs `primary`, and `fallback` whenever `primary` finds no path.
#[derive(Clone, Debug, Default)]
pub struct FallbackPlanner<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Pathfinder, F: Pathfinder> FallbackPlanner<P, F> {
    /// Chain two strategies.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// The strategy tried first.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The strategy used when the first finds nothing.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: Pathfinder, F: Pathfinder> Pathfinder for FallbackPlanner<P, F> {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn plan(&self, request: &PlanRequest<'_>) -> PathResult {
        match self.primary.plan(request) {
            PathResult::NoPath => {
                debug!(
                    "[Fallback] {} found no path, trying {}",
                    self.primary.name(),
                    self.fallback.name()
                );
                self.fallback.plan(request)
            }
            path => path,
        }
    }
}

/// Tangent-recursive, then tangent-pair, then heuristic.
///
/// The heuristic planner always answers, so the chain never returns
/// [`PathResult::NoPath`].
pub type PlannerChain =
    FallbackPlanner<TangentRecursivePlanner, FallbackPlanner<TangentPairPlanner, HeuristicPlanner>>;

impl PlannerChain {
    /// Build the standard chain sharing one collision model.
    pub fn standard(
        model: CollisionModel,
        recursive: RecursiveConfig,
        tangent_pair: TangentPairConfig,
        heuristic: HeuristicConfig,
    ) -> Self {
        FallbackPlanner::new(
            TangentRecursivePlanner::new(recursive, model.clone()),
            FallbackPlanner::new(
                TangentPairPlanner::new(tangent_pair, model.clone()),
                HeuristicPlanner::new(heuristic, model),
            ),
        )
    }

    /// Standard chain with default configuration.
    pub fn with_defaults() -> Self {
        Self::standard(
            CollisionModel::default(),
            RecursiveConfig::default(),
            TangentPairConfig::default(),
            HeuristicConfig::default(),
        )
    }
}
