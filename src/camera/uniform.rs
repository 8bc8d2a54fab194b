use glam::{Mat3, Mat4, Vec4};

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-frame transform block laid out for a std140 uniform buffer.
///
/// Built once per frame from the camera's view and projection plus the
/// model matrix of whatever is being drawn.
pub struct FrameTransforms {
    /// Projection · view · model.
    pub pvm: [[f32; 4]; 4],
    /// View · model, for eye-space lighting.
    pub vm: [[f32; 4]; 4],
    /// Normal matrix: cofactor of the upper 3×3 of `vm`, one padded column
    /// per row of this array (std140 `mat3`).
    pub normal: [[f32; 4]; 3],
}

impl Default for FrameTransforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

impl FrameTransforms {
    /// Combine projection, view and model matrices.
    #[must_use]
    pub fn new(projection: Mat4, view: Mat4, model: Mat4) -> Self {
        let vm = view * model;
        let pvm = projection * vm;
        let normal = normal_matrix(Mat3::from_mat4(vm));

        Self {
            pvm: pvm.to_cols_array_2d(),
            vm: vm.to_cols_array_2d(),
            normal: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
        }
    }

    /// Transforms for `model` seen through `camera`.
    #[must_use]
    pub fn from_camera(camera: &Camera, model: Mat4) -> Self {
        Self::new(camera.projection(), camera.view(), model)
    }

    /// The combined projection · view · model matrix.
    #[must_use]
    pub fn pvm(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.pvm)
    }

    /// The normal matrix without std140 padding.
    #[must_use]
    pub fn normal(&self) -> Mat3 {
        Mat3::from_cols(
            Vec4::from_array(self.normal[0]).truncate(),
            Vec4::from_array(self.normal[1]).truncate(),
            Vec4::from_array(self.normal[2]).truncate(),
        )
    }
}

/// Cofactor matrix of `r`: transforms normals like `(r⁻¹)ᵀ` up to a scale
/// factor, without needing `r` to be invertible.
fn normal_matrix(r: Mat3) -> Mat3 {
    Mat3::from_cols(
        r.y_axis.cross(r.z_axis),
        r.z_axis.cross(r.x_axis),
        r.x_axis.cross(r.y_axis),
    )
}
