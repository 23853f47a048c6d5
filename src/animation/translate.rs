//! Straight-line movement.

use glam::{Mat3, Vec2};

use super::timing::Timing;
use super::traits::Animation;
use super::transformation::Transformation;

/// Moves the view from one offset to another, in pixels.
#[derive(Debug, Clone)]
pub struct TranslateAnimation {
    from: Vec2,
    to: Vec2,
    timing: Timing,
}

impl TranslateAnimation {
    /// Translate from offset `from` to offset `to`.
    #[must_use]
    pub fn new(from: Vec2, to: Vec2, timing: Timing) -> Self {
        Self { from, to, timing }
    }

    /// Vertical-only movement by `delta_y`, starting at the view's resting
    /// position.
    #[must_use]
    pub fn vertical(delta_y: f32, timing: Timing) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(0.0, delta_y), timing)
    }

    /// Offset at the eased fraction `t`.
    #[must_use]
    pub fn offset_at(&self, t: f32) -> Vec2 {
        self.from.lerp(self.to, t)
    }
}

impl Animation for TranslateAnimation {
    fn timing(&self) -> &Timing {
        &self.timing
    }

    fn apply_transformation(
        &self,
        interpolated_time: f32,
        transformation: &mut Transformation,
    ) {
        transformation.matrix =
            Mat3::from_translation(self.offset_at(interpolated_time));
    }

    fn name(&self) -> &'static str {
        "translate"
    }
}
