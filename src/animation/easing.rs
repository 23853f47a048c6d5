//! Easing functions for animation interpolation.
//!
//! Maps raw playback progress to the interpolated fraction handed to
//! [`Animation::apply_transformation`](super::Animation::apply_transformation).

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease-in with configurable strength: `t^(2·factor)`.
    Accelerate {
        /// Curve strength; `1.0` is a plain quadratic.
        factor: f32,
    },
    /// Ease-out with configurable strength: `1 - (1-t)^(2·factor)`.
    Decelerate {
        /// Curve strength; `1.0` is a plain quadratic.
        factor: f32,
    },
    /// Cosine ease-in-out.
    AccelerateDecelerate,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for a coin toss: quadratic ease-out, so the coin spins
    /// fast off the thumb and slows down before landing.
    pub const DEFAULT: EasingFunction =
        EasingFunction::Decelerate { factor: 1.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::Accelerate { factor } => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            EasingFunction::Decelerate { factor } => {
                let omt = 1.0 - t;
                if factor == 1.0 {
                    1.0 - omt * omt
                } else {
                    1.0 - omt.powf(2.0 * factor)
                }
            }
            EasingFunction::AccelerateDecelerate => {
                ((t + 1.0) * PI).cos() / 2.0 + 0.5
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_decelerate() {
        let decel = EasingFunction::Decelerate { factor: 1.0 };
        assert_eq!(decel.evaluate(0.0), 0.0);
        assert_eq!(decel.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(decel.evaluate(1.0), 1.0);

        let strong = EasingFunction::Decelerate { factor: 2.0 };
        assert!((strong.evaluate(0.5) - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_accelerate() {
        let accel = EasingFunction::Accelerate { factor: 1.0 };
        assert_eq!(accel.evaluate(0.5), 0.25);
        assert_eq!(accel.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_accelerate_decelerate_is_symmetric() {
        let f = EasingFunction::AccelerateDecelerate;
        assert!(f.evaluate(0.0).abs() < 1e-6);
        assert!((f.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((f.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!((f.evaluate(0.25) + f.evaluate(0.75) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let decel = EasingFunction::default();
        assert_eq!(decel.evaluate(-0.5), 0.0);
        assert_eq!(decel.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_default_is_decelerate() {
        assert_eq!(
            EasingFunction::default(),
            EasingFunction::Decelerate { factor: 1.0 }
        );
    }
}
