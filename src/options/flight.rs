use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Flight", inline)]
#[serde(default)]
/// Vertical path the coin follows while it spins: up, then back down.
pub struct FlightOptions {
    /// How far the coin rises, in pixels.
    #[schemars(title = "Height", range(min = 0.0, max = 2000.0), extend("step" = 10.0))]
    pub rise_distance: f32,
    /// Time to reach the top, in milliseconds.
    #[schemars(title = "Rise (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub rise_duration_ms: u64,
    /// Time to fall back, in milliseconds.
    #[schemars(title = "Fall (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub fall_duration_ms: u64,
}

impl FlightOptions {
    /// Rise phase length.
    #[must_use]
    pub fn rise_duration(&self) -> Duration {
        Duration::from_millis(self.rise_duration_ms)
    }

    /// Fall phase length.
    #[must_use]
    pub fn fall_duration(&self) -> Duration {
        Duration::from_millis(self.fall_duration_ms)
    }
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            rise_distance: 700.0,
            rise_duration_ms: 2000,
            fall_duration_ms: 1000,
        }
    }
}
