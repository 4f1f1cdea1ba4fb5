use flightline::{
    components::{AltitudeReference, ControlConfig, SpatialComponent},
    plugins::VehiclePlugin,
};
use nalgebra::Vector3;

/// Creates a level spatial component at the given height
pub fn create_test_spatial(altitude: f64) -> SpatialComponent {
    SpatialComponent::at_position(Vector3::new(0.0, altitude, 0.0))
}

/// Creates a default vehicle at 500 m measured from sea level
pub fn create_test_vehicle(name: &str) -> VehiclePlugin {
    VehiclePlugin::new(name, ControlConfig::default())
        .with_spatial(create_test_spatial(500.0))
        .with_altitude_reference(AltitudeReference::sea_level())
}

/// Path of a config shipped with the crate
pub fn config_path(file: &str) -> String {
    format!("{}/configs/{}", env!("CARGO_MANIFEST_DIR"), file)
}
