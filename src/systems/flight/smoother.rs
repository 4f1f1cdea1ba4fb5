use crate::components::{ControlInputs, FlightParameters, VehicleState};
use crate::utils::{lerp, PERCENT, SMOOTH_CEILING_NUDGE, SMOOTH_FLOOR_NUDGE, TRUE_SMOOTH_GAIN};

/// Unsmoothed rotation for one frame, in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RotationRates {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// Scale raw axes by the rotation constants and the frame time.
///
/// Pitch and yaw are negated before scaling; roll is scaled by `-dt`.
pub fn raw_rotation(inputs: &ControlInputs, params: &FlightParameters, dt: f64) -> RotationRates {
    let pitch = -inputs.pitch * params.pitch_const;
    let roll = inputs.roll * params.roll_const;
    let yaw = -inputs.yaw * params.yaw_const;

    RotationRates {
        pitch: pitch * dt,
        roll: roll * -dt,
        yaw: yaw * dt,
    }
}

/// Schedule rotation sensitivity from the current thrust.
///
/// Inside `(min_smooth, max_smooth)` the coefficient follows thrust, with the target
/// held to the band so a single frame can never carry it outside. On the floor it is
/// pushed back up by a fixed step; on the ceiling it only comes down once the vehicle
/// is below `min_control_speed_percent` of `max_speed`.
pub fn update_sensitivity(state: &mut VehicleState, params: &FlightParameters, dt: f64) {
    let min = params.min_smooth;
    let max = params.max_smooth;

    if state.smooth_rotation > min && state.smooth_rotation < max {
        let rate = (params.max_speed - params.max_speed / params.min_control_speed_percent) * dt;
        let target = state.true_thrust.clamp(min, max);
        state.smooth_rotation = lerp(state.smooth_rotation, target, rate);
    }
    if state.smooth_rotation <= min {
        state.smooth_rotation += SMOOTH_FLOOR_NUDGE;
    }
    if state.smooth_rotation >= max
        && state.true_thrust < params.max_speed * (params.min_control_speed_percent / PERCENT)
    {
        state.smooth_rotation -= SMOOTH_CEILING_NUDGE;
    }

    state.true_smooth = lerp(state.true_smooth, state.smooth_rotation, TRUE_SMOOTH_GAIN * dt);
}

/// Lag each rotation delta behind its raw rate, blended by `true_smooth * dt`.
pub fn apply_smoothing(state: &mut VehicleState, raw: &RotationRates, dt: f64) {
    let factor = state.true_smooth * dt;
    state.true_pitch = lerp(state.true_pitch, raw.pitch, factor);
    state.true_roll = lerp(state.true_roll, raw.roll, factor);
    state.true_yaw = lerp(state.true_yaw, raw.yaw, factor);
}

/// Full control smoothing pass for one frame.
///
/// Uses the thrust left by the previous frame, so it must run before the thrust update.
pub fn smooth_controls(
    state: &mut VehicleState,
    params: &FlightParameters,
    inputs: &ControlInputs,
    dt: f64,
) {
    let raw = raw_rotation(inputs, params, dt);
    update_sensitivity(state, params, dt);
    apply_smoothing(state, &raw, dt);
}
