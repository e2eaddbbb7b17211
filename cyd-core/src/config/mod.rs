//! Configuration types
//!
//! Board-agnostic configuration structures. With the `serde` feature they
//! can be loaded from whatever storage the application uses.

pub mod calibration;
pub mod hardware;
pub mod types;

pub use calibration::CalibrationMap;
pub use hardware::*;
pub use types::*;
