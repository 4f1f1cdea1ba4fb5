pub mod flight;

pub use flight::{
    fixed_step, flight_fixed_system, flight_frame_system, flight_telemetry_system, frame_step,
    FixedStepOutput, FrameOutput,
};
