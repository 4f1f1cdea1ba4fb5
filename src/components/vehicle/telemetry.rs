use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Display values derived from a vehicle every frame. Angles are in degrees.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub true_speed: f64,
    /// Nose elevation above the horizon
    pub attitude: f64,
    /// Angle between world up and the vehicle's up axis
    pub bank: f64,
    pub incidence: f64,
    pub heading: f64,
    /// Height above the altitude reference; held while no reference exists
    pub altitude: f64,
    /// Stall-threshold dive coefficient
    pub nose_pitch: f64,

    // Local euler angles after the last fixed step, each in [0, 360)
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Reference level that altitude telemetry is measured from, e.g. sea level.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudeReference {
    pub level: f64,
}

impl AltitudeReference {
    pub fn new(level: f64) -> Self {
        Self { level }
    }

    pub fn sea_level() -> Self {
        Self { level: 0.0 }
    }
}
