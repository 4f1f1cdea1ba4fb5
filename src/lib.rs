//! Per-frame flight dynamics for Bevy hosts.
//!
//! Raw control axes are smoothed, turned into thrust and stall behaviour every frame,
//! and integrated into translation, rotation and lift at a fixed rate.

pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AltitudeReference, ControlConfig, ControlInputs, FlightParameters, PhysicsComponent,
    SpatialComponent, Telemetry, VehicleState,
};
pub use plugins::{FlightPlugin, VehiclePlugin};
pub use resources::PhysicsConfig;
pub use utils::ConfigError;
