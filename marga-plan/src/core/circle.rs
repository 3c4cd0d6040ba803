//! Circular obstacle shape.

use super::Vector2D;

/// A circle defined by centre and radius.
///
/// Obstacles are over-approximated by circles for planning. Padding an
/// obstacle produces a new circle through [`Circle::inflated`]; the
/// original footprint is never touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Circle centre
    pub centre: Vector2D,
    radius: f64,
}

impl Circle {
    /// Create a new circle. Negative radii clamp to zero.
    #[inline]
    pub fn new(centre: Vector2D, radius: f64) -> Self {
        Self {
            centre,
            radius: radius.max(0.0),
        }
    }

    /// Circle radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Change the radius in place. Negative radii clamp to zero.
    #[inline]
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    /// A copy of this circle grown by `extra` (shrunk if negative).
    #[inline]
    pub fn inflated(&self, extra: f64) -> Circle {
        Circle::new(self.centre, self.radius + extra)
    }

    /// Whether the point lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Vector2D) -> bool {
        self.centre.distance(&point) <= self.radius
    }
}
