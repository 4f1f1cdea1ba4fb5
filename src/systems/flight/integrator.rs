use nalgebra::Vector3;

use crate::components::{
    AltitudeReference, FlightParameters, Force, ForceCategory, PhysicsComponent,
    SpatialComponent, Telemetry, VehicleState,
};
use crate::utils::{angle_between_deg, TRANSLATION_DIVISOR};

/// What one fixed step did to the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStepOutput {
    /// Body-frame translation, `None` when the thrust guard skipped it
    pub translation: Option<Vector3<f64>>,
    /// Body-frame rotation as `(pitch, yaw, roll)` degrees
    pub rotation: Vector3<f64>,
    /// Upward force handed to the rigid body
    pub vertical_force: f64,
}

/// Forward distance for one fixed step, or `None` once thrust exceeds `max_speed`.
pub fn forward_step(state: &VehicleState, params: &FlightParameters) -> Option<f64> {
    if state.true_thrust <= params.max_speed {
        Some((state.true_speed - state.true_drag) / TRANSLATION_DIVISOR + state.afterburner_const)
    } else {
        None
    }
}

/// Translate, push the lift force and rotate by the latest smoothed deltas.
///
/// The physics accumulator is cleared first, so it only ever holds this step's force.
/// Local euler angles after the rotation are written to `telemetry`.
pub fn integrate_fixed_step(
    state: &VehicleState,
    params: &FlightParameters,
    spatial: &mut SpatialComponent,
    physics: &mut PhysicsComponent,
    telemetry: &mut Telemetry,
) -> FixedStepOutput {
    let translation =
        forward_step(state, params).map(|distance| Vector3::new(0.0, 0.0, distance));
    if let Some(delta) = &translation {
        spatial.translate_local(delta);
    }

    let vertical_force = state.drag - params.gravity_const;
    physics.clear_forces();
    physics.add_force(Force {
        vector: Vector3::new(0.0, vertical_force, 0.0),
        category: ForceCategory::Aerodynamic,
    });

    let rotation = Vector3::new(state.true_pitch, -state.true_yaw, state.true_roll);
    spatial.rotate_local(rotation.x, rotation.y, rotation.z);

    let euler = spatial.euler_degrees();
    telemetry.pitch = euler.x;
    telemetry.yaw = euler.y;
    telemetry.roll = euler.z;

    FixedStepOutput {
        translation,
        rotation,
        vertical_force,
    }
}

/// Recompute display telemetry from the current state and attitude.
///
/// Altitude is only refreshed when a reference is present.
pub fn update_telemetry(
    state: &VehicleState,
    params: &FlightParameters,
    spatial: &SpatialComponent,
    reference: Option<&AltitudeReference>,
    telemetry: &mut Telemetry,
) {
    let world_up = Vector3::y();

    telemetry.true_speed = state.true_speed;
    telemetry.nose_pitch = state.nose_pitch;
    telemetry.attitude = -(angle_between_deg(&world_up, &spatial.forward()) - 90.0);
    telemetry.bank = angle_between_deg(&world_up, &spatial.up());
    telemetry.incidence = telemetry.attitude + params.angle_of_attack;
    telemetry.heading = spatial.euler_degrees().y;

    if let Some(reference) = reference {
        telemetry.altitude = spatial.position.y - reference.level;
    }
}
