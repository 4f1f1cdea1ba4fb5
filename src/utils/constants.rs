// Rotation-sensitivity scheduling
pub const SMOOTH_FLOOR_NUDGE: f64 = 0.01; // added per frame at or below min_smooth
pub const SMOOTH_CEILING_NUDGE: f64 = 0.1; // removed per frame at or above max_smooth
pub const TRUE_SMOOTH_GAIN: f64 = 5.0; // lag of true_smooth behind smooth_rotation

// Throttle shaping
pub const THROTTLE_AXIS_DIVISOR: f64 = 2.0;
pub const THROTTLE_SCALE: f64 = 90.0; // full forward axis maps to 45 before speed_const
pub const AIR_THINNING_DIVISOR: f64 = 20.0; // attenuation at ceiling_max

// Speed and stall handling
pub const SPEED_THRUST_DIVISOR: f64 = 2.0; // true_speed = true_thrust / 2 * max_speed
pub const NOSE_RECOVERY_RATE_FACTOR: f64 = 2.0; // recovery runs at twice the dive rate
pub const NOSE_DIVE_DEFICIT_GAIN: f64 = 5.0;
pub const PERCENT: f64 = 100.0;

// Fixed-step translation: (true_speed - true_drag) / TRANSLATION_DIVISOR per step
pub const TRANSLATION_DIVISOR: f64 = 100.0;

pub const DEFAULT_FIXED_TIMESTEP: f64 = 1.0 / 50.0; // 50 Hz
