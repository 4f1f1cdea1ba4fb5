use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_FIXED_TIMESTEP;

/// Rate of the fixed flight phase.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Seconds per fixed step
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_FIXED_TIMESTEP,
        }
    }
}

impl PhysicsConfig {
    pub fn with_rate(hz: f64) -> Self {
        Self {
            timestep: 1.0 / hz,
        }
    }
}
