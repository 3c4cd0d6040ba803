//! Mathematical utilities for angles and scalar comparisons.
//!
//! All angles are in degrees. Directions follow the screen-space convention
//! of [`Vector2D`](super::Vector2D): 0° along +X, counter-clockwise on screen.

/// Absolute tolerance for floating point equality.
pub const EPSILON: f64 = 1e-8;

/// Check whether two values are equal within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Check whether two values are equal within `eps`.
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Normalize angle to [-180, 180).
///
/// # Example
/// ```
/// use marga_plan::core::math::normalise_angle;
///
/// assert_eq!(normalise_angle(275.0), -85.0);
/// assert_eq!(normalise_angle(-560.0), 160.0);
/// assert_eq!(normalise_angle(180.0), -180.0);
/// ```
#[inline]
pub fn normalise_angle(degrees: f64) -> f64 {
    let mut a = degrees % 360.0;
    if a >= 180.0 {
        a -= 360.0;
    } else if a < -180.0 {
        a += 360.0;
    }
    a
}

/// Signed angular difference from `from` to `to`, in [-180, 180).
///
/// # Example
/// ```
/// use marga_plan::core::math::angle_diff;
///
/// assert_eq!(angle_diff(170.0, -170.0), 20.0);
/// assert_eq!(angle_diff(-170.0, 170.0), -20.0);
/// ```
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalise_angle(to - from)
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Square of a value.
#[inline]
pub fn sq(x: f64) -> f64 {
    x * x
}
