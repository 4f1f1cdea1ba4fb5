use approx::assert_relative_eq;
use flightline::components::{SpatialComponent, Telemetry, VehicleState};
use nalgebra::Vector3;

/// Assert that every flight state value is finite
#[track_caller]
pub fn assert_state_valid(state: &VehicleState) {
    let values = [
        ("true_thrust", state.true_thrust),
        ("true_drag", state.true_drag),
        ("afterburner_const", state.afterburner_const),
        ("drag", state.drag),
        ("true_speed", state.true_speed),
        ("smooth_rotation", state.smooth_rotation),
        ("true_smooth", state.true_smooth),
        ("true_pitch", state.true_pitch),
        ("true_roll", state.true_roll),
        ("true_yaw", state.true_yaw),
        ("nose_dive_const", state.nose_dive_const),
        ("nose_pitch", state.nose_pitch),
    ];
    for (name, value) in values {
        assert!(value.is_finite(), "{} is not finite: {}", name, value);
    }
    assert!(state.drag >= 0.0, "Drag must be non-negative");
}

/// Assert that telemetry is finite and angles lie in their ranges
#[track_caller]
pub fn assert_telemetry_valid(telemetry: &Telemetry) {
    assert!(telemetry.true_speed.is_finite(), "Speed is not finite");
    assert!(telemetry.altitude.is_finite(), "Altitude is not finite");
    assert!(
        (-90.0..=90.0).contains(&telemetry.attitude),
        "Attitude out of range: {}",
        telemetry.attitude
    );
    assert!(
        (0.0..=180.0).contains(&telemetry.bank),
        "Bank out of range: {}",
        telemetry.bank
    );
    for angle in [telemetry.heading, telemetry.pitch, telemetry.yaw, telemetry.roll] {
        assert!((0.0..360.0).contains(&angle), "Euler angle out of range: {}", angle);
    }
}

/// Assert that two positions are equal within tolerance
#[track_caller]
pub fn assert_position_eq(actual: &SpatialComponent, expected: Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.position, expected, epsilon = epsilon);
}
