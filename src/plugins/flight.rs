use bevy::prelude::*;

use crate::components::{
    AltitudeReference, ControlConfig, ControlInputs, PhysicsComponent, SpatialComponent,
    Telemetry, VehicleState,
};
use crate::resources::PhysicsConfig;
use crate::systems::{flight_fixed_system, flight_frame_system, flight_telemetry_system};

/// Frame-rate flight stages, run in `Update`
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Frame,
    Telemetry,
}

/// Fixed-rate flight stages, run in `FixedUpdate`
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightFixedSet {
    Integrate,
}

/// Registers the flight systems and the fixed timestep they integrate at.
#[derive(Default)]
pub struct FlightPlugin {
    config: PhysicsConfig,
}

impl FlightPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        info!("Flight integration at {:.1} Hz", 1.0 / self.config.timestep);

        app.insert_resource(self.config)
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(Update, (FlightSet::Frame, FlightSet::Telemetry).chain())
            .configure_sets(FixedUpdate, FlightFixedSet::Integrate);

        app.add_systems(
            Update,
            (
                flight_frame_system.in_set(FlightSet::Frame),
                flight_telemetry_system.in_set(FlightSet::Telemetry),
            ),
        )
        .add_systems(
            FixedUpdate,
            flight_fixed_system.in_set(FlightFixedSet::Integrate),
        );
    }
}

/// Everything a flight vehicle entity carries.
#[derive(Bundle)]
pub struct VehicleBundle {
    pub config: ControlConfig,
    pub state: VehicleState,
    pub inputs: ControlInputs,
    pub telemetry: Telemetry,
    pub spatial: SpatialComponent,
    pub physics: PhysicsComponent,
    pub name: Name,
}

impl VehicleBundle {
    pub fn new(name: impl Into<String>, config: ControlConfig, spatial: SpatialComponent) -> Self {
        Self {
            state: VehicleState::new(&config),
            config,
            inputs: ControlInputs::default(),
            telemetry: Telemetry::default(),
            spatial,
            physics: PhysicsComponent::new(),
            name: Name::new(name.into()),
        }
    }
}

/// Spawns one flight vehicle at startup. Add it once per vehicle.
#[derive(Clone)]
pub struct VehiclePlugin {
    name: String,
    config: ControlConfig,
    spatial: SpatialComponent,
    altitude_reference: Option<AltitudeReference>,
}

impl VehiclePlugin {
    pub fn new(name: impl Into<String>, config: ControlConfig) -> Self {
        Self {
            name: name.into(),
            config,
            spatial: SpatialComponent::default(),
            altitude_reference: None,
        }
    }

    pub fn with_spatial(mut self, spatial: SpatialComponent) -> Self {
        self.spatial = spatial;
        self
    }

    pub fn with_altitude_reference(mut self, reference: AltitudeReference) -> Self {
        self.altitude_reference = Some(reference);
        self
    }

    fn setup_vehicle(mut commands: Commands, plugin: VehiclePlugin) {
        info!(
            "Spawning vehicle {} at altitude {:.1}",
            plugin.name,
            plugin.spatial.altitude()
        );

        let mut entity = commands.spawn(VehicleBundle::new(
            plugin.name,
            plugin.config,
            plugin.spatial,
        ));
        if let Some(reference) = plugin.altitude_reference {
            entity.insert(reference);
        }
    }
}

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        let plugin = self.clone();
        app.add_systems(Startup, move |commands: Commands| {
            Self::setup_vehicle(commands, plugin.clone())
        });
    }

    fn is_unique(&self) -> bool {
        false
    }
}
