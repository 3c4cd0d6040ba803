//! Pitch bounds.

use serde::{Deserialize, Serialize};

use crate::core::Vector2D;

/// Pitch width in centimetres.
pub const PITCH_WIDTH_CM: f64 = 244.0;
/// Pitch height in centimetres.
pub const PITCH_HEIGHT_CM: f64 = 113.7;

/// Rectangular pitch spanning `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    /// Extent along X (cm)
    #[serde(default = "default_width")]
    pub width: f64,
    /// Extent along Y (cm)
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    PITCH_WIDTH_CM
}

fn default_height() -> f64 {
    PITCH_HEIGHT_CM
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            width: PITCH_WIDTH_CM,
            height: PITCH_HEIGHT_CM,
        }
    }
}

impl Pitch {
    /// Create a pitch with custom dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether the point lies on the pitch (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: Vector2D) -> bool {
        self.contains_padded(p, 0.0)
    }

    /// Whether the point lies at least `padding` away from every wall.
    #[inline]
    pub fn contains_padded(&self, p: Vector2D, padding: f64) -> bool {
        p.x >= padding
            && p.x <= self.width - padding
            && p.y >= padding
            && p.y <= self.height - padding
    }

    /// Pitch centre.
    #[inline]
    pub fn centre(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the diagonal, the longest unobstructed ray on the pitch.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// The four walls as segments: top, right, bottom, left.
    pub fn walls(&self) -> [(Vector2D, Vector2D); 4] {
        let tl = Vector2D::new(0.0, 0.0);
        let tr = Vector2D::new(self.width, 0.0);
        let br = Vector2D::new(self.width, self.height);
        let bl = Vector2D::new(0.0, self.height);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}
