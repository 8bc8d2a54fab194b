use std::f32::consts::FRAC_PI_4;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and projection parameters.
pub struct CameraOptions {
    /// Eye position in world space.
    #[schemars(title = "Eye")]
    pub eye: [f32; 3],
    /// Look-at target, also the orbit pivot.
    #[schemars(title = "Target")]
    pub target: [f32; 3],
    /// Up hint; must not be parallel to `eye - target`.
    #[schemars(title = "Up")]
    pub up: [f32; 3],
    /// Vertical field of view in radians.
    #[schemars(title = "Field of View", range(min = 0.1, max = 3.0), extend("step" = 0.01))]
    pub fov: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [5.0, 5.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov: FRAC_PI_4,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl CameraOptions {
    /// Build a camera placed and projected according to these options.
    #[must_use]
    pub fn build_camera(&self, aspect: f32) -> Camera {
        let mut camera = Camera::default();
        camera.perspective(self.fov, aspect, self.near, self.far);
        camera.look_at(
            Vec3::from_array(self.eye),
            Vec3::from_array(self.target),
            Vec3::from_array(self.up),
        );
        camera
    }
}
