use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("accelerate_const must be non-zero, it scales the throttle-up blend")]
    ZeroAccelerateConst,

    #[error("ceiling_min and ceiling_max are both {0}, the air thinning band is empty")]
    CollapsedCeiling(f64),

    #[error("min_smooth and max_smooth are both {0}, the sensitivity band is empty")]
    CollapsedSmoothing(f64),

    #[error("min_control_speed_percent must be non-zero")]
    ZeroMinControlSpeedPercent,

    #[error("speed_const must be non-zero, it normalises the throttle target")]
    ZeroSpeedConst,

    #[error("level_flight_percent must be non-zero, it sets the stall threshold")]
    ZeroLevelFlightPercent,

    #[error("Parameter '{name}' is not finite: {value}")]
    NonFinite { name: &'static str, value: f64 },
}
