/// Camera operation produced from a pointer event.
///
/// Positions are in physical pixels; `Zoom` offsets are already scaled
/// for [`Camera::zoom`](crate::camera::Camera::zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Left button went down at the given cursor position.
    BeginDrag {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Left button went up at the given cursor position.
    EndDrag {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Cursor moved; rotates the camera if a drag is active.
    Drag {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Change the field of view by a logistic step.
    Zoom {
        /// Scaled scroll offset (positive = zoom in).
        offset: f32,
    },
}
