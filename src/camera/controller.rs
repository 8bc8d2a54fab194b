use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;

use crate::camera::core::Camera;

/// Radians of rotation per pixel of pointer travel.
pub const DEFAULT_ROTATE_SENSITIVITY: f32 = 0.02;

/// Drag state of the left mouse button.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Button held; `last_cursor` is the pointer position of the previous
    /// event.
    Dragging { last_cursor: Vec2 },
}

/// Turns left-button drags into orbit rotations of a bound [`Camera`].
///
/// The controller never owns the camera. It keeps a weak handle to a camera
/// owned by the host; once that camera is dropped, or before any camera is
/// bound, events only drive the drag state machine.
///
/// Horizontal travel rotates about the camera's current up axis, vertical
/// travel about its current right axis, both pivoting on the look-at
/// center. Rotations are applied as each move event arrives; nothing is
/// buffered between events.
#[derive(Debug)]
pub struct CameraController {
    camera: Weak<RefCell<Camera>>,
    state: DragState,
    sensitivity: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Unbound, idle controller with the default sensitivity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sensitivity(DEFAULT_ROTATE_SENSITIVITY)
    }

    /// Unbound, idle controller rotating `sensitivity` radians per pixel.
    #[must_use]
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            camera: Weak::new(),
            state: DragState::Idle,
            sensitivity,
        }
    }

    /// Bind to `camera`, replacing any previous binding.
    ///
    /// An ongoing drag continues against the new camera.
    pub fn set_camera(&mut self, camera: &Rc<RefCell<Camera>>) {
        self.camera = Rc::downgrade(camera);
        log::debug!("camera controller rebound (dragging: {})", self.is_dragging());
    }

    /// Whether a live camera is bound.
    #[must_use]
    pub fn has_camera(&self) -> bool {
        self.camera.strong_count() > 0
    }

    /// Start dragging from `(x, y)`.
    pub fn lmb_pressed(&mut self, x: f32, y: f32) {
        log::trace!("drag start at ({x}, {y})");
        self.state = DragState::Dragging {
            last_cursor: Vec2::new(x, y),
        };
    }

    /// Stop dragging. The camera is not touched.
    pub fn lmb_released(&mut self, x: f32, y: f32) {
        log::trace!("drag end at ({x}, {y})");
        self.state = DragState::Idle;
    }

    /// Pointer moved to `(x, y)`; rotates the camera while dragging.
    pub fn mouse_moved(&mut self, x: f32, y: f32) {
        let DragState::Dragging { last_cursor } = &mut self.state else {
            return;
        };
        let cursor = Vec2::new(x, y);
        let delta = cursor - *last_cursor;
        *last_cursor = cursor;

        self.rotate_camera(delta);
    }

    /// Whether the left button is currently held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer position of the last drag event, `None` while idle.
    #[must_use]
    pub fn last_cursor(&self) -> Option<Vec2> {
        match self.state {
            DragState::Dragging { last_cursor } => Some(last_cursor),
            DragState::Idle => None,
        }
    }

    /// Radians of rotation per pixel.
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Change the radians-per-pixel factor.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    fn rotate_camera(&self, delta: Vec2) {
        let Some(camera) = self.camera.upgrade() else {
            log::trace!("drag of {delta} ignored: no camera bound");
            return;
        };
        let Ok(mut camera) = camera.try_borrow_mut() else {
            log::warn!("drag of {delta} dropped: camera is borrowed elsewhere");
            return;
        };

        // Each axis is read after the previous rotation has been applied.
        let right = camera.x();
        camera.rotate_around_center(-self.sensitivity * delta.y, right);
        let up = camera.y();
        camera.rotate_around_center(-self.sensitivity * delta.x, up);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_4;

    use glam::Vec3;

    use super::*;

    fn shared_camera() -> Rc<RefCell<Camera>> {
        let mut camera = Camera::default();
        camera.perspective(FRAC_PI_4, 1.0, 0.1, 100.0);
        camera.look_at(Vec3::splat(5.0), Vec3::ZERO, Vec3::Y);
        Rc::new(RefCell::new(camera))
    }

    fn bound_controller(camera: &Rc<RefCell<Camera>>) -> CameraController {
        let mut controller = CameraController::new();
        controller.set_camera(camera);
        controller
    }

    #[test]
    fn starts_idle_and_unbound() {
        let controller = CameraController::new();
        assert!(!controller.is_dragging());
        assert!(!controller.has_camera());
        assert_eq!(controller.last_cursor(), None);
        assert_eq!(controller.sensitivity(), DEFAULT_ROTATE_SENSITIVITY);
    }

    #[test]
    fn move_while_idle_leaves_camera_alone() {
        let camera = shared_camera();
        let before = *camera.borrow();
        let mut controller = bound_controller(&camera);

        controller.mouse_moved(10.0, 10.0);

        assert_eq!(*camera.borrow(), before);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn horizontal_drag_rotates_about_up_only() {
        let camera = shared_camera();
        let before = *camera.borrow();
        let mut controller = bound_controller(&camera);

        controller.lmb_pressed(0.0, 0.0);
        controller.mouse_moved(10.0, 0.0);

        let after = *camera.borrow();
        let angle = 10.0 * DEFAULT_ROTATE_SENSITIVITY;
        // Up axis is the rotation axis, so it does not move.
        assert!(after.y().abs_diff_eq(before.y(), 1e-6));
        // Right axis swung by exactly the drag angle.
        assert!((after.x().dot(before.x()) - angle.cos()).abs() < 1e-6);
        assert!(after.position() != before.position());
        assert_eq!(after.center(), before.center());
        assert_eq!(controller.last_cursor(), Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn vertical_drag_rotates_about_right_only() {
        let camera = shared_camera();
        let before = *camera.borrow();
        let mut controller = bound_controller(&camera);

        controller.lmb_pressed(3.0, 4.0);
        controller.mouse_moved(3.0, 9.0);

        let after = *camera.borrow();
        let angle = 5.0 * DEFAULT_ROTATE_SENSITIVITY;
        assert!(after.x().abs_diff_eq(before.x(), 1e-6));
        assert!((after.y().dot(before.y()) - angle.cos()).abs() < 1e-6);
    }

    #[test]
    fn drag_direction_matches_negative_sensitivity() {
        let camera = shared_camera();
        let mut expected = *camera.borrow();
        expected.rotate_around_center(-0.4, expected.y());

        let mut controller = bound_controller(&camera);
        controller.lmb_pressed(100.0, 50.0);
        controller.mouse_moved(120.0, 50.0);

        let after = *camera.borrow();
        assert!(after.position().abs_diff_eq(expected.position(), 1e-5));
        assert!(after.z().abs_diff_eq(expected.z(), 1e-6));
    }

    #[test]
    fn release_stops_rotation() {
        let camera = shared_camera();
        let mut controller = bound_controller(&camera);

        controller.lmb_pressed(0.0, 0.0);
        controller.mouse_moved(10.0, 0.0);
        let dragged = *camera.borrow();

        controller.lmb_released(10.0, 0.0);
        assert_eq!(*camera.borrow(), dragged);

        controller.mouse_moved(40.0, 25.0);
        assert_eq!(*camera.borrow(), dragged);
        assert_eq!(controller.last_cursor(), None);
    }

    #[test]
    fn displacement_is_measured_from_previous_event() {
        let camera = shared_camera();
        let mut controller = bound_controller(&camera);

        controller.lmb_pressed(0.0, 0.0);
        controller.mouse_moved(5.0, 0.0);
        controller.mouse_moved(10.0, 0.0);
        let stepped = *camera.borrow();

        let other = shared_camera();
        let mut single = bound_controller(&other);
        single.lmb_pressed(0.0, 0.0);
        single.mouse_moved(10.0, 0.0);
        let direct = *other.borrow();

        assert!(stepped.position().abs_diff_eq(direct.position(), 1e-5));
        assert!(stepped.x().abs_diff_eq(direct.x(), 1e-6));
    }

    #[test]
    fn repeated_press_restarts_drag_from_new_point() {
        let camera = shared_camera();
        let mut controller = bound_controller(&camera);

        controller.lmb_pressed(0.0, 0.0);
        controller.lmb_pressed(50.0, 50.0);
        let before = *camera.borrow();
        controller.mouse_moved(50.0, 50.0);

        assert_eq!(*camera.borrow(), before);
        assert!(controller.is_dragging());
    }

    #[test]
    fn duplicate_release_is_harmless() {
        let mut controller = CameraController::new();
        controller.lmb_released(1.0, 1.0);
        controller.lmb_released(1.0, 1.0);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn drag_without_camera_only_tracks_state() {
        let mut controller = CameraController::new();
        controller.lmb_pressed(0.0, 0.0);
        controller.mouse_moved(7.0, 3.0);
        assert_eq!(controller.last_cursor(), Some(Vec2::new(7.0, 3.0)));
    }

    #[test]
    fn dropped_camera_unbinds() {
        let camera = shared_camera();
        let mut controller = bound_controller(&camera);
        assert!(controller.has_camera());

        drop(camera);
        assert!(!controller.has_camera());
        controller.lmb_pressed(0.0, 0.0);
        controller.mouse_moved(10.0, 10.0);
    }

    #[test]
    fn rebinding_mid_drag_redirects_motion() {
        let first = shared_camera();
        let second = shared_camera();
        let untouched = *first.borrow();
        let mut controller = bound_controller(&first);

        controller.lmb_pressed(0.0, 0.0);
        controller.set_camera(&second);
        controller.mouse_moved(10.0, 0.0);

        assert_eq!(*first.borrow(), untouched);
        assert!(*second.borrow() != untouched);
        assert!(controller.is_dragging());
    }

    #[test]
    fn borrowed_camera_is_skipped() {
        let camera = shared_camera();
        let mut controller = bound_controller(&camera);
        controller.lmb_pressed(0.0, 0.0);

        let held = camera.borrow();
        let before = *held;
        controller.mouse_moved(10.0, 0.0);
        assert_eq!(*held, before);
    }

    #[test]
    fn sensitivity_scales_rotation() {
        let camera = shared_camera();
        let before = *camera.borrow();
        let mut controller = bound_controller(&camera);
        controller.set_sensitivity(0.1);

        controller.lmb_pressed(0.0, 0.0);
        controller.mouse_moved(2.0, 0.0);

        let after = *camera.borrow();
        assert!((after.x().dot(before.x()) - 0.2_f32.cos()).abs() < 1e-6);
    }
}
