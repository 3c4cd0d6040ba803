//! Common interface of every planning strategy.

use super::request::{PathResult, PlanRequest};
use super::waypoint::Waypoint;

/// A planning strategy.
///
/// Implementations hold only immutable configuration; all search state
/// lives inside a single `plan` call, so one planner can serve any number
/// of threads.
pub trait Pathfinder: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Plan a route for the request.
    fn plan(&self, request: &PlanRequest<'_>) -> PathResult;

    /// The leg to execute now, if a route exists.
    fn next_waypoint(&self, request: &PlanRequest<'_>) -> Option<Waypoint> {
        self.plan(request).first().copied()
    }
}

impl<T: Pathfinder + ?Sized> Pathfinder for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn plan(&self, request: &PlanRequest<'_>) -> PathResult {
        (**self).plan(request)
    }
}
