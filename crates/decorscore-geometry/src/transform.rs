use serde::{Deserialize, Serialize};

use crate::point::Point2D;

/// Local-to-world mapping of an area: scale, then rotate, then translate.
///
/// Rotation is in radians, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub translation: Point2D,
    pub rotation: f64,
    pub scale: Point2D,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Point2D::ORIGIN,
        rotation: 0.0,
        scale: Point2D::new(1.0, 1.0),
    };

    #[must_use]
    pub const fn from_translation(translation: Point2D) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub const fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    #[must_use]
    pub const fn with_scale(self, scale: Point2D) -> Self {
        Self { scale, ..self }
    }

    #[must_use]
    pub fn apply(&self, local: Point2D) -> Point2D {
        let scaled = Point2D::new(local.x * self.scale.x, local.y * self.scale.y);
        scaled.rotated(self.rotation) + self.translation
    }

    /// Maps a world point into the local frame.
    ///
    /// A zero scale axis has no inverse; the result is then non-finite and
    /// is contained by no polygon.
    #[must_use]
    pub fn inverse_apply(&self, world: Point2D) -> Point2D {
        let unrotated = (world - self.translation).rotated(-self.rotation);
        Point2D::new(unrotated.x / self.scale.x, unrotated.y / self.scale.y)
    }

    /// Larger of the two axis scale magnitudes.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.scale.x.abs().max(self.scale.y.abs())
    }

    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }
}
