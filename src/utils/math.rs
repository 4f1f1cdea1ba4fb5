use nalgebra::{Rotation3, UnitQuaternion, Vector3};

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Hermite interpolation between two values.
///
/// The factor is clamped to `[0, 1]` and eased with `3t² - 2t³`, so the result always
/// lies between `start` and `end`.
#[inline]
pub fn smoothstep(start: f64, end: f64, factor: f64) -> f64 {
    let t = factor.clamp(0.0, 1.0);
    let t = t * t * (3.0 - 2.0 * t);
    start + (end - start) * t
}

/// Angle between two vectors in degrees, in `[0, 180]`
pub fn angle_between_deg(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.angle(b).to_degrees()
}

/// Wrap an angle in degrees into `[0, 360)`
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Build a rotation from euler angles in degrees.
///
/// Axes are body axes in a Y-up, Z-forward frame: `pitch` about X, `yaw` about Y and
/// `roll` about Z. Roll is applied first, then pitch, then yaw.
pub fn euler_deg_to_quaternion(pitch: f64, yaw: f64, roll: f64) -> UnitQuaternion<f64> {
    let qx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch.to_radians());
    let qy = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw.to_radians());
    let qz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll.to_radians());
    qy * qx * qz
}

/// Decompose a rotation into `(pitch, yaw, roll)` degrees, each wrapped into `[0, 360)`.
///
/// Inverse of [`euler_deg_to_quaternion`].
pub fn quaternion_to_euler_deg(quat: &UnitQuaternion<f64>) -> Vector3<f64> {
    let rot: Rotation3<f64> = quat.to_rotation_matrix();
    let m = rot.matrix();

    let pitch = (-m[(1, 2)]).clamp(-1.0, 1.0).asin();
    let (yaw, roll) = if m[(1, 2)].abs() < 1.0 - 1e-9 {
        (m[(0, 2)].atan2(m[(2, 2)]), m[(1, 0)].atan2(m[(1, 1)]))
    } else {
        // Gimbal lock, fold everything into yaw
        ((-m[(2, 0)]).atan2(m[(0, 0)]), 0.0)
    };

    Vector3::new(
        wrap_degrees(pitch.to_degrees()),
        wrap_degrees(yaw.to_degrees()),
        wrap_degrees(roll.to_degrees()),
    )
}
