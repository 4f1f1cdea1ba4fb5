use crate::components::{ControlInputs, FlightParameters, VehicleState};
use crate::utils::{
    lerp, smoothstep, AIR_THINNING_DIVISOR, NOSE_DIVE_DEFICIT_GAIN, NOSE_RECOVERY_RATE_FACTOR,
    PERCENT, SPEED_THRUST_DIVISOR, THROTTLE_AXIS_DIVISOR, THROTTLE_SCALE,
};

/// Fraction of throttle left above `ceiling_min`.
///
/// Linear across the ceiling band, reaching `1/20` at `ceiling_max`. Beyond `ceiling_max`
/// it keeps growing along the same line; nothing clamps it.
pub fn air_thinning(altitude: f64, params: &FlightParameters) -> f64 {
    ((altitude - params.ceiling_min) / (params.ceiling_max - params.ceiling_min))
        / AIR_THINNING_DIVISOR
}

/// Normalised thrust the engine is heading for at this throttle and altitude.
pub fn throttle_target(throttle_axis: f64, altitude: f64, params: &FlightParameters) -> f64 {
    let mut throttle = (-throttle_axis / THROTTLE_AXIS_DIVISOR) * THROTTLE_SCALE;
    if altitude > params.ceiling_min {
        throttle *= air_thinning(altitude, params);
    }
    throttle / params.speed_const
}

/// Ease thrust toward `target`: smoothstep when spooling up, linear when spooling down.
///
/// The result always lies between `current` and `target`.
pub fn blend_thrust(current: f64, target: f64, params: &FlightParameters, dt: f64) -> f64 {
    if target >= current {
        smoothstep(current, target, params.accelerate_const * dt)
    } else {
        lerp(current, target, params.decelerate_const * dt)
    }
}

/// Quadratic drag proxy for a thrust level
pub fn drag_for(thrust: f64, params: &FlightParameters) -> f64 {
    params.lift_const * (thrust * thrust)
}

pub fn speed_for(thrust: f64, params: &FlightParameters) -> f64 {
    (thrust / SPEED_THRUST_DIVISOR) * params.max_speed
}

/// Stall threshold on normalised thrust
pub fn stall_thrust(params: &FlightParameters) -> f64 {
    params.max_speed / params.level_flight_percent
}

/// Net speed at or below which the nose starts to drop
pub fn level_flight_speed(params: &FlightParameters) -> f64 {
    params.max_speed * params.level_flight_percent / PERCENT
}

/// Ease the stall coefficient toward `max_dive_force` under the stall threshold and
/// back to zero, twice as fast, above it.
pub fn update_nose_pitch(state: &mut VehicleState, params: &FlightParameters, dt: f64) {
    if state.true_thrust <= stall_thrust(params) {
        state.nose_pitch = lerp(
            state.nose_pitch,
            params.max_dive_force,
            state.nose_dive_const * dt,
        );
    } else {
        state.nose_pitch = lerp(
            state.nose_pitch,
            0.0,
            NOSE_RECOVERY_RATE_FACTOR * state.nose_dive_const * dt,
        );
    }
}

pub fn update_airbrake(state: &mut VehicleState, params: &FlightParameters, held: bool, dt: f64) {
    if held {
        state.true_drag = lerp(state.true_drag, state.true_speed, params.raise_flap_rate * dt);
    } else if state.true_drag != 0.0 {
        state.true_drag = lerp(state.true_drag, 0.0, params.lower_flap_rate * dt);
    }
}

pub fn update_afterburner(
    state: &mut VehicleState,
    params: &FlightParameters,
    held: bool,
    dt: f64,
) {
    if held {
        state.afterburner_const = lerp(
            state.afterburner_const,
            params.max_afterburner,
            params.afterburner_accelerate * dt,
        );
    } else if state.afterburner_const != 0.0 {
        state.afterburner_const = lerp(
            state.afterburner_const,
            0.0,
            params.afterburner_decelerate * dt,
        );
    }
}

/// Thrust, drag, stall coefficient, speed, airbrake and afterburner for one frame.
///
/// `altitude` is the vehicle's world height, used for air thinning.
pub fn update_thrust(
    state: &mut VehicleState,
    params: &FlightParameters,
    inputs: &ControlInputs,
    altitude: f64,
    dt: f64,
) {
    let target = throttle_target(inputs.throttle, altitude, params);
    state.true_thrust = blend_thrust(state.true_thrust, target, params, dt);
    state.drag = drag_for(state.true_thrust, params);

    update_nose_pitch(state, params, dt);
    state.true_speed = speed_for(state.true_thrust, params);

    update_airbrake(state, params, inputs.airbrake, dt);
    update_afterburner(state, params, inputs.afterburner, dt);
}

/// Drive `nose_dive_const` from the speed deficit and report the pitch to apply.
///
/// Triggers when net speed is at or below the level flight speed, equality included.
/// The coefficient moves toward `max_dive_force` at `deficit * 5 * dt`, and its new
/// value is returned as a world-space pitch-down angle in degrees that the caller
/// applies right away.
pub fn apply_nose_dive(
    state: &mut VehicleState,
    params: &FlightParameters,
    dt: f64,
) -> Option<f64> {
    let threshold = level_flight_speed(params);
    let net_speed = state.net_speed();
    if net_speed > threshold {
        return None;
    }

    let deficit = threshold - net_speed;
    state.nose_dive_const = lerp(
        state.nose_dive_const,
        params.max_dive_force,
        deficit * NOSE_DIVE_DEFICIT_GAIN * dt,
    );
    Some(state.nose_dive_const)
}
