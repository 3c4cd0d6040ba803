//! Planner output unit.

use std::fmt;

use crate::core::Vector2D;

/// One leg of a planned route: drive from `origin` to `target`.
///
/// The target is also stored in the frame of the origin pose so a
/// consumer can turn it straight into a turn + drive command. All derived
/// fields are computed once at construction; a waypoint never changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    origin: Vector2D,
    origin_heading: f64,
    target: Vector2D,
    target_local: Vector2D,
    distance: f64,
    bearing: f64,
    cost_to_destination: f64,
    is_endpoint: bool,
}

impl Waypoint {
    /// Create a waypoint from global coordinates.
    ///
    /// # Arguments
    /// * `origin` - Where the leg starts (cm)
    /// * `origin_heading` - Heading at the start (degrees)
    /// * `target` - Where the leg ends (cm)
    /// * `cost_to_destination` - Remaining route length from `origin`
    /// * `is_endpoint` - Whether `target` is the final destination
    pub fn new(
        origin: Vector2D,
        origin_heading: f64,
        target: Vector2D,
        cost_to_destination: f64,
        is_endpoint: bool,
    ) -> Self {
        let target_local = (target - origin).rotate(-origin_heading);
        Self {
            origin,
            origin_heading,
            target,
            target_local,
            distance: target_local.length(),
            bearing: target_local.direction(),
            cost_to_destination,
            is_endpoint,
        }
    }

    /// Create a waypoint from a target already expressed in the origin frame.
    pub fn local(
        origin: Vector2D,
        origin_heading: f64,
        target_local: Vector2D,
        cost_to_destination: f64,
        is_endpoint: bool,
    ) -> Self {
        let target = origin + target_local.rotate(origin_heading);
        Self::new(origin, origin_heading, target, cost_to_destination, is_endpoint)
    }

    /// Start of the leg.
    #[inline]
    pub fn origin(&self) -> Vector2D {
        self.origin
    }

    /// Heading at the start of the leg (degrees).
    #[inline]
    pub fn origin_heading(&self) -> f64 {
        self.origin_heading
    }

    /// End of the leg.
    #[inline]
    pub fn target(&self) -> Vector2D {
        self.target
    }

    /// End of the leg in the origin frame (+X = origin heading).
    #[inline]
    pub fn target_local(&self) -> Vector2D {
        self.target_local
    }

    /// Straight-line length of the leg.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Turn needed at the origin to face the target (degrees).
    #[inline]
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Remaining route length measured from the origin.
    #[inline]
    pub fn cost_to_destination(&self) -> f64 {
        self.cost_to_destination
    }

    /// Whether the target is the final destination.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        self.is_endpoint
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {:.1}° -> {} (local {}, dist {:.2}, turn {:.2}°, cost {:.2}{})",
            self.origin,
            self.origin_heading,
            self.target,
            self.target_local,
            self.distance,
            self.bearing,
            self.cost_to_destination,
            if self.is_endpoint { ", end" } else { "" }
        )
    }
}
