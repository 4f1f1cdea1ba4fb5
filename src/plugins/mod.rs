mod flight;

pub use flight::{FlightFixedSet, FlightPlugin, FlightSet, VehicleBundle, VehiclePlugin};
