use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::vehicle::ControlConfig;
use crate::utils::SMOOTH_FLOOR_NUDGE;

/// Mutable flight state of a single vehicle.
///
/// Written by the frame step (smoothing, thrust, stall) and read by the fixed step.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Normalised thrust response
    pub true_thrust: f64,
    /// Speed taken away by the airbrake
    pub true_drag: f64,
    /// Extra forward speed from the afterburner
    pub afterburner_const: f64,
    /// Quadratic drag proxy, handed to the rigid body as damping
    pub drag: f64,
    /// Display airspeed derived from thrust
    pub true_speed: f64,

    /// Rotation-sensitivity target, scheduled by thrust
    pub smooth_rotation: f64,
    /// Lagged sensitivity actually used to blend rotation
    pub true_smooth: f64,

    // Smoothed rotation deltas in degrees, applied once per fixed step
    pub true_pitch: f64,
    pub true_roll: f64,
    pub true_yaw: f64,

    /// Speed-deficit dive coefficient, also the immediate world pitch applied in a stall
    pub nose_dive_const: f64,
    /// Stall-threshold dive coefficient
    pub nose_pitch: f64,
}

impl VehicleState {
    pub fn new(config: &ControlConfig) -> Self {
        let params = config.params();
        Self {
            true_thrust: 0.0,
            true_drag: 0.0,
            afterburner_const: 0.0,
            drag: 0.0,
            true_speed: 0.0,
            smooth_rotation: params.min_smooth + SMOOTH_FLOOR_NUDGE,
            true_smooth: 0.0,
            true_pitch: 0.0,
            true_roll: 0.0,
            true_yaw: 0.0,
            nose_dive_const: params.nose_dive_const,
            nose_pitch: 0.0,
        }
    }

    /// Net forward speed after airbrake and afterburner
    pub fn net_speed(&self) -> f64 {
        self.true_speed - self.true_drag + self.afterburner_const
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new(&ControlConfig::default())
    }
}
