//! Flight dynamics for vehicles driven by raw control axes.
//!
//! Work is split into two ordered phases. The frame phase runs once per rendered frame
//! with the frame delta: it smooths the controls, updates thrust and applies the stall
//! nose dive. The fixed phase runs at the physics rate and moves the vehicle by the
//! values the most recent frame phase left in [`VehicleState`].

mod integrator;
mod smoother;
mod thrust;

use bevy::prelude::*;

pub use integrator::{forward_step, integrate_fixed_step, update_telemetry, FixedStepOutput};
pub use smoother::{
    apply_smoothing, raw_rotation, smooth_controls, update_sensitivity, RotationRates,
};
pub use thrust::{
    air_thinning, apply_nose_dive, blend_thrust, drag_for, level_flight_speed, speed_for,
    stall_thrust, throttle_target, update_afterburner, update_airbrake, update_nose_pitch,
    update_thrust,
};

use crate::components::{
    AltitudeReference, ControlConfig, ControlInputs, FlightParameters, PhysicsComponent,
    SpatialComponent, Telemetry, VehicleState,
};

/// What one frame step did beyond updating [`VehicleState`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// World pitch-down in degrees applied for a stall, if one was
    pub nose_dive_rotation: Option<f64>,
}

/// Advance one vehicle by a rendered frame of `dt` seconds.
pub fn frame_step(
    state: &mut VehicleState,
    params: &FlightParameters,
    inputs: &ControlInputs,
    spatial: &mut SpatialComponent,
    physics: &mut PhysicsComponent,
    dt: f64,
) -> FrameOutput {
    smooth_controls(state, params, inputs, dt);
    update_thrust(state, params, inputs, spatial.altitude(), dt);

    let nose_dive_rotation = apply_nose_dive(state, params, dt);
    if let Some(pitch) = nose_dive_rotation {
        spatial.rotate_world(pitch, 0.0, 0.0);
    }

    physics.linear_damping = state.drag;

    FrameOutput { nose_dive_rotation }
}

/// Advance one vehicle by a fixed physics step.
pub fn fixed_step(
    state: &VehicleState,
    params: &FlightParameters,
    spatial: &mut SpatialComponent,
    physics: &mut PhysicsComponent,
    telemetry: &mut Telemetry,
) -> FixedStepOutput {
    integrate_fixed_step(state, params, spatial, physics, telemetry)
}

/// Frame phase for every vehicle.
pub fn flight_frame_system(
    time: Res<Time>,
    mut query: Query<(
        &ControlConfig,
        &ControlInputs,
        &mut VehicleState,
        &mut SpatialComponent,
        &mut PhysicsComponent,
    )>,
) {
    let dt = time.delta_secs_f64();

    for (config, inputs, mut state, mut spatial, mut physics) in query.iter_mut() {
        let output = frame_step(
            &mut state,
            config.params(),
            inputs,
            &mut spatial,
            &mut physics,
            dt,
        );

        trace!(
            "thrust: {:.4}, speed: {:.2}, smooth: {:.3}",
            state.true_thrust,
            state.true_speed,
            state.true_smooth
        );
        if let Some(pitch) = output.nose_dive_rotation {
            debug!(
                "Nose dive at net speed {:.2}, pitching down {:.4} deg",
                state.net_speed(),
                pitch
            );
        }
    }
}

/// Refresh display telemetry after the frame phase.
pub fn flight_telemetry_system(
    mut query: Query<(
        &ControlConfig,
        &VehicleState,
        &SpatialComponent,
        Option<&AltitudeReference>,
        &mut Telemetry,
    )>,
) {
    for (config, state, spatial, reference, mut telemetry) in query.iter_mut() {
        update_telemetry(state, config.params(), spatial, reference, &mut telemetry);
    }
}

/// Fixed phase for every vehicle.
pub fn flight_fixed_system(
    mut query: Query<(
        &ControlConfig,
        &VehicleState,
        &mut SpatialComponent,
        &mut PhysicsComponent,
        &mut Telemetry,
    )>,
) {
    for (config, state, mut spatial, mut physics, mut telemetry) in query.iter_mut() {
        let output = fixed_step(
            state,
            config.params(),
            &mut spatial,
            &mut physics,
            &mut telemetry,
        );

        if output.translation.is_none() {
            trace!("Thrust {:.3} above max speed, holding position", state.true_thrust);
        }
    }
}
