//! Per-frame transform produced by animations.

use glam::{Mat3, Vec2};

/// A 2D projective transform plus opacity.
///
/// The matrix works on homogeneous view coordinates (x right, y down, w).
/// It is a full 3×3 rather than an affine 2×3 so that perspective
/// projections of 3D rotations fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    /// Homogeneous 2D matrix.
    pub matrix: Mat3,
    /// Opacity multiplier (0.0 to 1.0).
    pub alpha: f32,
}

impl Transformation {
    /// No-op transform.
    pub const IDENTITY: Self = Self {
        matrix: Mat3::IDENTITY,
        alpha: 1.0,
    };

    /// Reset to [`IDENTITY`](Self::IDENTITY).
    pub fn clear(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Apply `other` before this transform.
    pub fn compose(&mut self, other: &Self) {
        self.matrix *= other.matrix;
        self.alpha *= other.alpha;
    }

    /// Map a view-space point, including the perspective divide.
    #[must_use]
    pub fn map_point(&self, point: Vec2) -> Vec2 {
        let mapped = self.matrix * point.extend(1.0);
        if mapped.z.abs() <= f32::EPSILON {
            return mapped.truncate();
        }
        mapped.truncate() / mapped.z
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_translations() {
        let mut t = Transformation::IDENTITY;
        t.compose(&Transformation {
            matrix: Mat3::from_translation(Vec2::new(0.0, -10.0)),
            alpha: 1.0,
        });
        t.compose(&Transformation {
            matrix: Mat3::from_translation(Vec2::new(3.0, 4.0)),
            alpha: 0.5,
        });
        let p = t.map_point(Vec2::new(1.0, 1.0));
        assert!((p - Vec2::new(4.0, -5.0)).length() < 1e-5);
        assert_eq!(t.alpha, 0.5);

        t.clear();
        assert_eq!(t, Transformation::IDENTITY);
    }
}
