pub mod physics;
pub mod spatial;
pub mod vehicle;

pub use physics::{Force, ForceCategory, PhysicsComponent};
pub use spatial::SpatialComponent;
pub use vehicle::{
    AltitudeReference, ControlConfig, ControlInputs, FlightParameters, Telemetry, VehicleState,
};
