use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::EasingFunction;
use crate::camera::DEFAULT_CAMERA_DISTANCE;
use crate::coin::{AxisDirection, Face};
use crate::error::TossError;
use crate::toss::TossParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Toss", inline)]
#[serde(default)]
/// Coin view attributes, in the raw integer encoding of the configuration
/// surface. Validated by [`TossOptions::to_params`].
pub struct TossOptions {
    /// Full turns per toss.
    #[schemars(title = "Turns", range(min = 1, max = 100))]
    pub circle_count: u32,
    /// Rotation sense around X: -1, 0 or 1.
    #[schemars(title = "X Axis", range(min = -1, max = 1))]
    pub x_axis_direction: i32,
    /// Rotation sense around Y: -1, 0 or 1.
    #[schemars(title = "Y Axis", range(min = -1, max = 1))]
    pub y_axis_direction: i32,
    /// Rotation sense around Z: -1, 0 or 1.
    #[schemars(title = "Z Axis", range(min = -1, max = 1))]
    pub z_axis_direction: i32,
    /// Landing face: 1 (front) or -1 (reverse).
    #[schemars(skip)]
    pub result: i32,
    /// Rotation length in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 20000), extend("step" = 100))]
    pub duration_ms: u64,
    /// Delay before the rotation, in milliseconds.
    #[schemars(title = "Start Offset (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub start_offset_ms: u64,
    /// Curve applied to rotation progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Eye distance of the projection camera, in pixels.
    #[schemars(skip)]
    pub camera_distance: f32,
}

impl TossOptions {
    /// Validate every field and convert to toss parameters.
    ///
    /// Fails on the first out-of-range field; nothing is partially applied.
    pub fn to_params(&self) -> Result<TossParams, TossError> {
        if self.circle_count == 0 {
            return Err(TossError::InvalidCircleCount(self.circle_count));
        }
        Ok(TossParams {
            circle_count: self.circle_count,
            x_axis: AxisDirection::parse("x", self.x_axis_direction)?,
            y_axis: AxisDirection::parse("y", self.y_axis_direction)?,
            z_axis: AxisDirection::parse("z", self.z_axis_direction)?,
            result: Face::try_from(self.result)?,
            duration: Duration::from_millis(self.duration_ms),
            start_offset: Duration::from_millis(self.start_offset_ms),
            easing: self.easing,
        })
    }
}

impl Default for TossOptions {
    fn default() -> Self {
        Self {
            circle_count: 12,
            x_axis_direction: 1,
            y_axis_direction: 0,
            z_axis_direction: 0,
            result: 1,
            duration_ms: 3000,
            start_offset_ms: 0,
            easing: EasingFunction::default(),
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}
