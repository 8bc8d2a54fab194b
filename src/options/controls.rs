use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::controller::DEFAULT_ROTATE_SENSITIVITY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Which interactions a demo enables and how strongly they respond.
pub struct ControlOptions {
    /// Left-button drag orbits the camera around its target.
    #[schemars(title = "Orbit")]
    pub orbit: bool,
    /// Scroll wheel zooms by changing the field of view.
    #[schemars(title = "Zoom")]
    pub zoom: bool,
    /// Window resizes update the projection aspect ratio.
    #[schemars(skip)]
    pub track_resize: bool,
    /// Radians of orbit per pixel of drag.
    #[schemars(title = "Rotate Sensitivity", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_sensitivity: f32,
    /// Raw scroll offsets are divided by this before zooming.
    #[schemars(title = "Scroll Divisor", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub scroll_divisor: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            orbit: true,
            zoom: true,
            track_resize: true,
            rotate_sensitivity: DEFAULT_ROTATE_SENSITIVITY,
            scroll_divisor: 30.0,
        }
    }
}
