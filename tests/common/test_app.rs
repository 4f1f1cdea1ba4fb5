use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flightline::{plugins::VehiclePlugin, plugins::FlightPlugin, resources::PhysicsConfig};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    vehicles: Vec<VehiclePlugin>,
    physics_config: Option<PhysicsConfig>,
    frame_time: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            physics_config: None,
            frame_time: 1.0 / 60.0,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicle(mut self, vehicle: VehiclePlugin) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_config = Some(config);
        self
    }

    pub fn with_frame_time(mut self, seconds: f64) -> Self {
        self.frame_time = seconds;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                self.frame_time,
            )))
            .add_plugins(FlightPlugin::with_config(
                self.physics_config.unwrap_or_default(),
            ));

        for vehicle in self.vehicles {
            app.add_plugins(vehicle);
        }

        // Run an initial update to spawn everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    /// Component of the vehicle spawned under `name`
    pub fn query_named<T: Component>(&mut self, name: &str) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Name, &T)>();
        query
            .iter(world)
            .find(|(entity_name, _)| entity_name.as_str() == name)
            .map(|(_, component)| component)
    }

    pub fn query_named_mut<T: Component>(&mut self, name: &str) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Name, &mut T)>();
        query
            .iter_mut(world)
            .find(|(entity_name, _)| entity_name.as_str() == name)
            .map(|(_, component)| component)
    }
}
