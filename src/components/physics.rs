use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Force accumulator for the host rigid body.
///
/// The flight systems only produce forces and damping; integrating them is left to
/// whichever physics backend owns the body.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhysicsComponent {
    /// Linear damping the body should use this frame
    pub linear_damping: f64,
    pub net_force: Vector3<f64>,
    pub forces: Vec<Force>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// World-space force vector
    pub vector: Vector3<f64>,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Custom(String),
}

impl PhysicsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_force(&mut self, force: Force) {
        self.net_force += force.vector;
        self.forces.push(force);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.net_force = Vector3::zeros();
    }
}
