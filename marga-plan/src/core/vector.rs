//! Vector types for pitch coordinates.
//!
//! Pitch coordinates are centimetres in screen space: +X to the right,
//! +Y downwards. Directions are degrees measured from +X and increase
//! counter-clockwise as seen on screen, which is what `atan2(-y, x)` yields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::math::{approx_eq, deg_to_rad, rad_to_deg};

/// A 2D vector or point (centimetres).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Vector2D {
    /// Zero vector (origin)
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing in the given direction (degrees).
    #[inline]
    pub fn from_direction(degrees: f64) -> Self {
        Vector2D::new(1.0, 0.0).rotate(degrees)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction in degrees, in (-180, 180].
    #[inline]
    pub fn direction(&self) -> f64 {
        // 0.0 - y keeps a zero y positive so the range stays (-180, 180]
        rad_to_deg((0.0 - self.y).atan2(self.x))
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Vector2D) -> f64 {
        (*self - *other).length()
    }

    /// Rotate around the origin by `degrees` (counter-clockwise on screen).
    #[inline]
    pub fn rotate(&self, degrees: f64) -> Vector2D {
        let rad = deg_to_rad(degrees);
        let (sin_a, cos_a) = rad.sin_cos();
        Vector2D::new(
            self.x * cos_a + self.y * sin_a,
            -self.x * sin_a + self.y * cos_a,
        )
    }

    /// Rescale to `new_length`, keeping the direction.
    ///
    /// A (near) zero vector has no direction and stays zero. A negative
    /// length flips the vector.
    #[inline]
    pub fn with_length(&self, new_length: f64) -> Vector2D {
        let old_length = self.length();
        if approx_eq(old_length, 0.0) {
            Vector2D::ZERO
        } else {
            *self * (new_length / old_length)
        }
    }

    /// Normalize to unit length (zero stays zero)
    #[inline]
    pub fn normalized(&self) -> Vector2D {
        self.with_length(1.0)
    }

    /// Perpendicular vector, `(-y, x)`.
    #[inline]
    pub fn perpendicular(&self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise comparison with floating tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Vector2D) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl Add for Vector2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A 3D vector, used for orientation tests.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector3D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vector3D {
    /// Create a new 3D vector
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a 2D vector into the z = 0 plane.
    #[inline]
    pub fn from_planar(v: Vector2D) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}
