//! Axis-angle rotation matrices.

use glam::{DMat3, DVec3};

/// Rotation by `angle` radians about `axis` (Rodrigues' formula).
///
/// The axis is normalized here, so any non-zero length works. A zero axis
/// yields a NaN matrix.
///
/// Double precision: repeated application must not drift the length of
/// the vectors it rotates.
#[must_use]
pub fn rotation(angle: f32, axis: DVec3) -> DMat3 {
    let u = axis.normalize();
    let (s, c) = f64::from(angle).sin_cos();
    let t = 1.0 - c;

    DMat3::from_cols(
        DVec3::new(
            c + u.x * u.x * t,
            u.y * u.x * t + u.z * s,
            u.z * u.x * t - u.y * s,
        ),
        DVec3::new(
            u.x * u.y * t - u.z * s,
            c + u.y * u.y * t,
            u.z * u.y * t + u.x * s,
        ),
        DVec3::new(
            u.x * u.z * t + u.y * s,
            u.y * u.z * t - u.x * s,
            c + u.z * u.z * t,
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::DQuat;

    use super::*;

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let r = rotation(FRAC_PI_2, DVec3::Z);
        // The f32 angle is off from π/2 by about 4e-8.
        assert!((r * DVec3::X).abs_diff_eq(DVec3::Y, 1e-7));
        assert!((r * DVec3::Y).abs_diff_eq(-DVec3::X, 1e-7));
    }

    #[test]
    fn axis_length_does_not_matter() {
        let a = rotation(0.7, DVec3::new(1.0, 2.0, 3.0));
        let b = rotation(0.7, DVec3::new(10.0, 20.0, 30.0));
        assert!(a.abs_diff_eq(b, 1e-12));
    }

    #[test]
    fn agrees_with_quaternion_rotation() {
        let axis = DVec3::new(-0.3, 0.8, 0.5).normalize();
        let angle = 1.3_f32;
        let r = rotation(angle, axis);
        let q = DQuat::from_axis_angle(axis, f64::from(angle));
        let v = DVec3::new(0.2, -1.0, 4.0);
        assert!((r * v).abs_diff_eq(q * v, 1e-12));
    }

    #[test]
    fn result_is_orthogonal() {
        let r = rotation(PI / 3.0, DVec3::new(1.0, 1.0, 0.0));
        assert!((r * r.transpose()).abs_diff_eq(DMat3::IDENTITY, 1e-12));
        assert!((r.determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_axis_propagates_nan() {
        let r = rotation(0.5, DVec3::ZERO);
        assert!(r.is_nan());
    }
}
