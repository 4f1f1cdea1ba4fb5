use approx::assert_relative_eq;
use bevy::prelude::*;
use flightline::{
    components::{
        ControlConfig, ControlInputs, PhysicsComponent, SpatialComponent, Telemetry,
        VehicleState,
    },
    plugins::VehiclePlugin,
    resources::PhysicsConfig,
};
use nalgebra::Vector3;

use crate::common::{
    assert_position_eq, assert_state_valid, assert_telemetry_valid, create_test_spatial,
    create_test_vehicle, TestAppBuilder,
};

#[test]
fn test_full_throttle_flies_forward() {
    let mut app = TestAppBuilder::new()
        .with_vehicle(create_test_vehicle("test_vehicle"))
        .build();

    if let Some(mut inputs) = app.query_single_mut::<ControlInputs>() {
        inputs.throttle = -2.0;
    }

    // Five seconds of frames
    app.run_steps(300);

    let state = app.query_single::<VehicleState>().unwrap().clone();
    assert_state_valid(&state);
    assert!(state.true_thrust > 1.5 && state.true_thrust <= 1.8);
    assert!(state.true_speed > 75.0);

    let spatial = app.query_single::<SpatialComponent>().unwrap().clone();
    assert!(spatial.position.z > 10.0, "Vehicle did not move forward");

    let telemetry = *app.query_single::<Telemetry>().unwrap();
    assert_telemetry_valid(&telemetry);
    assert_relative_eq!(telemetry.true_speed, state.true_speed);
    assert_relative_eq!(telemetry.altitude, spatial.position.y, epsilon = 1e-9);
}

#[test]
fn test_idle_vehicle_noses_down_in_place() {
    let mut app = TestAppBuilder::new()
        .with_vehicle(create_test_vehicle("test_vehicle"))
        .build();

    app.run_steps(60);

    let spatial = app.query_single::<SpatialComponent>().unwrap().clone();
    assert!(spatial.forward().y < 0.0, "Nose should drop without thrust");
    // Zero speed, so the fixed step never moves it
    assert_position_eq(&spatial, Vector3::new(0.0, 500.0, 0.0), 1e-9);

    let telemetry = *app.query_single::<Telemetry>().unwrap();
    assert_telemetry_valid(&telemetry);
    assert!(telemetry.attitude < 0.0);
    assert_relative_eq!(telemetry.altitude, 500.0, epsilon = 1e-9);

    let state = app.query_single::<VehicleState>().unwrap();
    assert!(state.nose_dive_const > ControlConfig::default().params().nose_dive_const);
}

#[test]
fn test_altitude_held_without_reference() {
    let vehicle = VehiclePlugin::new("no_reference", ControlConfig::default())
        .with_spatial(create_test_spatial(800.0));
    let mut app = TestAppBuilder::new().with_vehicle(vehicle).build();

    if let Some(mut inputs) = app.query_single_mut::<ControlInputs>() {
        inputs.throttle = -2.0;
    }
    app.run_steps(120);

    let telemetry = app.query_single::<Telemetry>().unwrap();
    assert_eq!(telemetry.altitude, 0.0);
    assert!(telemetry.true_speed > 0.0);
}

#[test]
fn test_fixed_step_hands_lift_to_rigid_body() {
    let mut app = TestAppBuilder::new()
        .with_vehicle(create_test_vehicle("test_vehicle"))
        .build();

    app.run_steps(10);

    // No thrust, so drag is zero and only gravity is left
    let physics = app.query_single::<PhysicsComponent>().unwrap();
    assert_eq!(physics.forces.len(), 1);
    assert_relative_eq!(physics.net_force, Vector3::new(0.0, -9.8, 0.0), epsilon = 1e-12);
    assert_eq!(physics.linear_damping, 0.0);
}

#[test]
fn test_roll_input_banks_vehicle() {
    let mut app = TestAppBuilder::new()
        .with_vehicle(create_test_vehicle("test_vehicle"))
        .build();

    if let Some(mut inputs) = app.query_single_mut::<ControlInputs>() {
        inputs.throttle = -2.0;
        inputs.roll = 1.0;
    }
    app.run_steps(120);

    let state = app.query_single::<VehicleState>().unwrap();
    assert!(state.true_roll < 0.0);

    let telemetry = *app.query_single::<Telemetry>().unwrap();
    assert_telemetry_valid(&telemetry);
    assert!(telemetry.bank > 1.0, "Expected a bank, got {}", telemetry.bank);
}

#[test]
fn test_custom_physics_rate() {
    let app = TestAppBuilder::new()
        .with_physics(PhysicsConfig::with_rate(120.0))
        .build();

    let fixed = app.get_state::<Time<Fixed>>().unwrap();
    assert_relative_eq!(fixed.timestep().as_secs_f64(), 1.0 / 120.0, epsilon = 1e-9);

    let config = app.get_state::<PhysicsConfig>().unwrap();
    assert_relative_eq!(config.timestep, 1.0 / 120.0);
}
