use glam::{Mat3, Vec3};

/// Distance from the view plane to the eye, in pixels: 8 inches at 72 dpi.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 576.0;

/// Perspective camera looking straight at the view plane.
///
/// Rotates a flat object lying in the view plane around the view's X, Y and
/// Z axes, then projects it back onto the plane. The result is a homogeneous
/// 2D matrix: edges swung towards the eye grow, edges swung away shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinCamera {
    /// Eye distance from the view plane, in pixels.
    pub distance: f32,
}

impl CoinCamera {
    /// Camera at the given eye distance. Non-positive distances fall back
    /// to [`DEFAULT_CAMERA_DISTANCE`].
    #[must_use]
    pub fn new(distance: f32) -> Self {
        let distance = if distance > 0.0 && distance.is_finite() {
            distance
        } else {
            DEFAULT_CAMERA_DISTANCE
        };
        Self { distance }
    }

    /// Projected rotation for per-axis angles in degrees.
    ///
    /// Rotations are applied X first, then Y, then Z. The origin is a fixed
    /// point; callers anchor elsewhere by wrapping the result in
    /// translations.
    #[must_use]
    pub fn rotate(&self, degrees: Vec3) -> Mat3 {
        let rotation = Mat3::from_rotation_x(degrees.x.to_radians())
            * Mat3::from_rotation_y(degrees.y.to_radians())
            * Mat3::from_rotation_z(degrees.z.to_radians());

        // A rotated point (x, y, 0) lands at depth z'; the eye sees it scaled
        // by d / (d + z'). Folding 1/d into the bottom row makes w = 1 + z'/d.
        let inv_distance = 1.0 / self.distance;
        Mat3::from_cols(
            Vec3::new(
                rotation.x_axis.x,
                rotation.x_axis.y,
                rotation.x_axis.z * inv_distance,
            ),
            Vec3::new(
                rotation.y_axis.x,
                rotation.y_axis.y,
                rotation.y_axis.z * inv_distance,
            ),
            Vec3::Z,
        )
    }
}

impl Default for CoinCamera {
    fn default() -> Self {
        Self {
            distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}
