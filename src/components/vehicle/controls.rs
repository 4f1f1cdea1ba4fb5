use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw control input for one vehicle, written by whatever input layer drives it.
///
/// Axes are normalised and usually lie in `[-1, 1]`. A throttle of `-1` is full forward.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub throttle: f64,
    /// Held airbrake button
    pub airbrake: bool,
    /// Held afterburner button
    pub afterburner: bool,
}

impl ControlInputs {
    pub fn new(pitch: f64, roll: f64, yaw: f64, throttle: f64) -> Self {
        Self {
            pitch,
            roll,
            yaw,
            throttle,
            ..Default::default()
        }
    }

    pub fn full_throttle() -> Self {
        Self {
            throttle: -1.0,
            ..Default::default()
        }
    }
}
