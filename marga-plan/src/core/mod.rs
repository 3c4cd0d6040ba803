//! Core geometry types and math.
//!
//! - [`Vector2D`]: screen-space vectors and points (centimetres)
//! - [`Circle`]: circular obstacle over-approximation
//! - [`geometry`]: intersections, tangents, containment tests
//! - [`math`]: angle normalisation and tolerances

pub mod circle;
pub mod geometry;
pub mod math;
pub mod vector;

pub use circle::Circle;
pub use vector::{Vector2D, Vector3D};
