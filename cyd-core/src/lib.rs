//! Board-agnostic core logic for the display and touch drivers
//!
//! This crate contains everything that does not touch a bus:
//!
//! - RGB565 color packing and the application palette
//! - Window clipping and screen-space points
//! - Raw digitizer samples, the three-sample consensus filter and the
//!   two-point calibration map
//! - Configuration type definitions
//! - The glyph lookup trait and a built-in 8x8 font

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod config;
pub mod font;
pub mod geometry;
pub mod touch;
pub mod traits;

pub use color::{color565, Rgb565};
pub use config::{CalibrationMap, DisplayConfig, Rotation, TouchConfig};
pub use font::Font8x8;
pub use geometry::{TouchPoint, Window};
pub use touch::RawSample;
pub use traits::GlyphSource;
