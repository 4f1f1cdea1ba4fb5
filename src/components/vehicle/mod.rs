pub mod config;
pub mod controls;
pub mod state;
pub mod telemetry;

pub use config::{ControlConfig, FlightParameters};
pub use controls::ControlInputs;
pub use state::VehicleState;
pub use telemetry::{AltitudeReference, Telemetry};
