pub mod constants;
pub mod errors;
pub mod math;

pub use constants::*;
pub use errors::*;
pub use math::*;
