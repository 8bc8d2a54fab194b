use std::f32::consts::PI;

use glam::{Mat4, Vec3, Vec4};

use crate::util::logistic::{logistic, logit};
use crate::util::rotation::rotation;

/// Smallest field of view [`Camera::zoom`] can produce.
const MIN_FOV: f32 = f32::MIN_POSITIVE;
/// Largest `f32` strictly below π.
const MAX_FOV: f32 = PI - 2.0 * f32::EPSILON;

/// Perspective orbit camera.
///
/// Orientation is kept as an explicit orthonormal basis: `x` points right,
/// `y` up and `z` backwards, from the look-at center toward the eye. Every
/// rotation is applied to all three vectors at once, so the basis stays
/// orthonormal without re-normalization.
///
/// A default camera is all zeros and only becomes usable once both
/// [`look_at`](Self::look_at) and [`perspective`](Self::perspective) have
/// been called. None of the methods validate their input: degenerate
/// arguments (`eye == center`, a zero rotation axis, `near >= far`) show up
/// as NaN or infinite matrix entries, never as a panic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    position: Vec3,
    center: Vec3,
    x: Vec3,
    y: Vec3,
    z: Vec3,
    /// Vertical field of view in radians, inside `(0, π)`.
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Place the eye at `eye` looking toward `center`.
    ///
    /// `up` only has to be non-parallel to `eye - center`; its length is
    /// irrelevant. Replaces the whole orientation.
    pub fn look_at(&mut self, eye: Vec3, center: Vec3, up: Vec3) {
        self.z = (eye - center).normalize();
        self.x = up.cross(self.z).normalize();
        self.y = self.z.cross(self.x).normalize();

        self.position = eye;
        self.center = center;
    }

    /// Set all projection parameters. `fov` is the vertical field of view
    /// in radians.
    pub fn perspective(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.fov = fov;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
    }

    /// Update the aspect ratio (width / height) after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// World-to-camera transform built from the basis and eye position.
    ///
    /// Rows of the rotation block are `x`, `y`, `z`; the translation is the
    /// eye position expressed in that basis, negated.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        let p = self.position;
        Mat4::from_cols(
            Vec4::new(self.x.x, self.y.x, self.z.x, 0.0),
            Vec4::new(self.x.y, self.y.y, self.z.y, 0.0),
            Vec4::new(self.x.z, self.y.z, self.z.z, 0.0),
            Vec4::new(-self.x.dot(p), -self.y.dot(p), -self.z.dot(p), 1.0),
        )
    }

    /// Right-handed perspective projection with OpenGL clip depth `[-1, 1]`.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }

    /// Change the field of view by `offset` steps on a logistic scale.
    ///
    /// Positive offsets narrow the view (zoom in), negative ones widen it,
    /// so a host passing wheel deltas straight through zooms in on wheel-up.
    /// Hosts that want wheel-up to zoom out negate the delta.
    ///
    /// The field of view is mapped from `(0, π)` onto the real line, shifted
    /// and mapped back, so steps feel linear around the middle of the range
    /// and the result never leaves `(0, π)`.
    pub fn zoom(&mut self, offset: f32) {
        let fraction = f64::from(self.fov) / std::f64::consts::PI;
        let y = logit(fraction) - f64::from(offset);
        let fov = (logistic(y) * std::f64::consts::PI) as f32;
        // Far out on the logistic tails the f32 result rounds to 0 or π.
        self.fov = fov.clamp(MIN_FOV, MAX_FOV);
    }

    /// Orbit the eye and the basis by `angle` radians about `axis`,
    /// pivoting on the look-at center.
    pub fn rotate_around_center(&mut self, angle: f32, axis: Vec3) {
        self.rotate_around_point(angle, axis, self.center);
    }

    fn rotate_around_point(&mut self, angle: f32, axis: Vec3, pivot: Vec3) {
        let r = rotation(angle, axis.as_dvec3());

        self.x = (r * self.x.as_dvec3()).as_vec3();
        self.y = (r * self.y.as_dvec3()).as_vec3();
        self.z = (r * self.z.as_dvec3()).as_vec3();

        let pivot = pivot.as_dvec3();
        let offset = r * (self.position.as_dvec3() - pivot);
        self.position = (pivot + offset).as_vec3();
    }

    /// Camera right axis in world space.
    #[must_use]
    pub fn x(&self) -> Vec3 {
        self.x
    }

    /// Camera up axis in world space.
    #[must_use]
    pub fn y(&self) -> Vec3 {
        self.y
    }

    /// Camera back axis in world space (from center toward the eye).
    #[must_use]
    pub fn z(&self) -> Vec3 {
        self.z
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at center, the pivot for orbiting.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }
}
