use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{euler_deg_to_quaternion, quaternion_to_euler_deg};

/// Host transform of a vehicle.
///
/// The frame is Y-up with the body's forward axis along local +Z and its right wing along
/// local +X. Euler angles are in degrees: positive pitch lowers the nose, positive yaw
/// turns toward +X.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space
    pub position: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(position: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self { position, attitude }
    }

    /// Create a new spatial component at a specific position, level and facing +Z
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Height above the world origin
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    /// Move along body axes.
    pub fn translate_local(&mut self, delta: &Vector3<f64>) {
        self.position += self.attitude * delta;
    }

    /// Rotate about the body's own axes by euler angles in degrees.
    pub fn rotate_local(&mut self, pitch: f64, yaw: f64, roll: f64) {
        let delta = euler_deg_to_quaternion(pitch, yaw, roll);
        self.attitude = UnitQuaternion::new_normalize((self.attitude * delta).into_inner());
    }

    /// Rotate about the world axes by euler angles in degrees.
    pub fn rotate_world(&mut self, pitch: f64, yaw: f64, roll: f64) {
        let delta = euler_deg_to_quaternion(pitch, yaw, roll);
        self.attitude = UnitQuaternion::new_normalize((delta * self.attitude).into_inner());
    }

    /// Current attitude as `(pitch, yaw, roll)` degrees, each in `[0, 360)`.
    pub fn euler_degrees(&self) -> Vector3<f64> {
        quaternion_to_euler_deg(&self.attitude)
    }
}
