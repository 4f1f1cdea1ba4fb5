use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::errors::ConfigError;

/// Tunable constants of the flight model.
///
/// Every field has an effective range; values outside it are accepted but can make the
/// model sluggish, twitchy or unstable. Only values that would divide by zero are
/// rejected, see [`ControlConfig::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParameters {
    // Thrust response
    /// Throttle-up rate. Close to 0 smooths acceleration; must not be 0.
    pub accelerate_const: f64,
    /// Throttle-down rate.
    pub decelerate_const: f64,
    /// Display speed at full normalised thrust; `max_speed / speed_const` is the true ratio.
    pub max_speed: f64,
    pub speed_const: f64,

    // Airbrake and afterburner
    pub raise_flap_rate: f64,
    pub lower_flap_rate: f64,
    pub max_afterburner: f64,
    pub afterburner_accelerate: f64,
    pub afterburner_decelerate: f64,

    // Lift, gravity and stall
    pub lift_const: f64,
    /// Effective range: 0 <= angle_of_attack <= 20
    pub angle_of_attack: f64,
    pub gravity_const: f64,
    pub level_flight_percent: f64,
    pub max_dive_force: f64,
    /// Initial value of the per-vehicle nose dive coefficient
    pub nose_dive_const: f64,

    // Rotation sensitivity scheduling
    pub min_smooth: f64,
    pub max_smooth: f64,
    pub max_control_speed_percent: f64,
    pub min_control_speed_percent: f64,

    // Rotation rates, degrees per second at full deflection
    /// Replace the three rotation constants with `locked_rotation_value`
    pub lock_rotation: bool,
    pub locked_rotation_value: f64,
    pub pitch_const: f64,
    pub roll_const: f64,
    pub yaw_const: f64,

    // Air thinning band
    pub ceiling_min: f64,
    pub ceiling_max: f64,
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            accelerate_const: 5.0,
            decelerate_const: 0.065,
            max_speed: 100.0,
            speed_const: 50.0,
            raise_flap_rate: 1.0,
            lower_flap_rate: 1.0,
            max_afterburner: 5.0,
            afterburner_accelerate: 0.5,
            afterburner_decelerate: 1.0,
            lift_const: 7.5,
            angle_of_attack: 15.0,
            gravity_const: 9.8,
            level_flight_percent: 25.0,
            max_dive_force: 0.1,
            nose_dive_const: 0.01,
            min_smooth: 0.5,
            max_smooth: 500.0,
            max_control_speed_percent: 75.0,
            min_control_speed_percent: 25.0,
            lock_rotation: false,
            locked_rotation_value: 120.0,
            pitch_const: 100.0,
            roll_const: 100.0,
            yaw_const: 100.0,
            ceiling_min: 1000.0,
            ceiling_max: 2000.0,
        }
    }
}

impl FlightParameters {
    fn numeric_fields(&self) -> [(&'static str, f64); 25] {
        [
            ("accelerate_const", self.accelerate_const),
            ("decelerate_const", self.decelerate_const),
            ("max_speed", self.max_speed),
            ("speed_const", self.speed_const),
            ("raise_flap_rate", self.raise_flap_rate),
            ("lower_flap_rate", self.lower_flap_rate),
            ("max_afterburner", self.max_afterburner),
            ("afterburner_accelerate", self.afterburner_accelerate),
            ("afterburner_decelerate", self.afterburner_decelerate),
            ("lift_const", self.lift_const),
            ("angle_of_attack", self.angle_of_attack),
            ("gravity_const", self.gravity_const),
            ("level_flight_percent", self.level_flight_percent),
            ("max_dive_force", self.max_dive_force),
            ("nose_dive_const", self.nose_dive_const),
            ("min_smooth", self.min_smooth),
            ("max_smooth", self.max_smooth),
            ("max_control_speed_percent", self.max_control_speed_percent),
            ("min_control_speed_percent", self.min_control_speed_percent),
            ("locked_rotation_value", self.locked_rotation_value),
            ("pitch_const", self.pitch_const),
            ("roll_const", self.roll_const),
            ("yaw_const", self.yaw_const),
            ("ceiling_min", self.ceiling_min),
            ("ceiling_max", self.ceiling_max),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, value)) = self
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConfigError::NonFinite { name, value });
        }
        if self.accelerate_const == 0.0 {
            return Err(ConfigError::ZeroAccelerateConst);
        }
        if self.ceiling_max == self.ceiling_min {
            return Err(ConfigError::CollapsedCeiling(self.ceiling_min));
        }
        if self.min_smooth == self.max_smooth {
            return Err(ConfigError::CollapsedSmoothing(self.min_smooth));
        }
        if self.min_control_speed_percent == 0.0 {
            return Err(ConfigError::ZeroMinControlSpeedPercent);
        }
        if self.speed_const == 0.0 {
            return Err(ConfigError::ZeroSpeedConst);
        }
        if self.level_flight_percent == 0.0 {
            return Err(ConfigError::ZeroLevelFlightPercent);
        }
        Ok(())
    }
}

/// Validated, immutable flight parameters attached to a vehicle.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ControlConfig {
    params: FlightParameters,
}

impl ControlConfig {
    /// Validate `params` and freeze them.
    ///
    /// With `lock_rotation` set, pitch, roll and yaw constants are all replaced by
    /// `locked_rotation_value` here; they never change afterwards.
    pub fn new(mut params: FlightParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        if params.lock_rotation {
            params.pitch_const = params.locked_rotation_value;
            params.roll_const = params.locked_rotation_value;
            params.yaw_const = params.locked_rotation_value;
        }
        Ok(Self { params })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let params: FlightParameters = serde_yaml::from_str(yaml)?;
        Self::new(params)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded flight config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn params(&self) -> &FlightParameters {
        &self.params
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            params: FlightParameters::default(),
        }
    }
}
