//! Driver configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::calibration::CalibrationMap;

/// Largest number of pixels pushed per bus write during a fill
///
/// The display driver keeps one buffer of this many pixels on the stack.
pub const MAX_CHUNK_PIXELS: usize = 1024;

/// Panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    #[default]
    Portrait,
    Landscape,
    PortraitFlipped,
    LandscapeFlipped,
}

impl Rotation {
    /// Clockwise rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Portrait => 0,
            Rotation::Landscape => 90,
            Rotation::PortraitFlipped => 180,
            Rotation::LandscapeFlipped => 270,
        }
    }
}

/// Display panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
    /// Orientation the panel was mounted in
    pub rotation: Rotation,
    /// Pixels per bus write when filling (clamped to 1..=MAX_CHUNK_PIXELS)
    pub chunk_pixels: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 320,
            rotation: Rotation::Portrait,
            chunk_pixels: MAX_CHUNK_PIXELS,
        }
    }
}

impl DisplayConfig {
    /// Chunk size actually used by the driver
    pub fn effective_chunk_pixels(&self) -> usize {
        self.chunk_pixels.clamp(1, MAX_CHUNK_PIXELS)
    }
}

/// Touch digitizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchConfig {
    /// Raw-to-screen mapping
    pub calibration: CalibrationMap,
    /// Screen width the calibration maps onto
    pub panel_width: u16,
    /// Screen height the calibration maps onto
    pub panel_height: u16,
    /// Readings below this are treated as no contact
    pub min_raw: u16,
    /// Readings above this are treated as no contact
    pub max_raw: u16,
    /// Largest raw difference between samples of one press
    pub max_jitter: u16,
    /// Pause between consecutive samples (ms)
    pub settle_ms: u32,
    /// Also compare the first and third Y readings
    ///
    /// Off by default: the stock filter compares x1/x2, x1/x3 and y1/y2
    /// only, and existing calibrations were tuned against that.
    pub symmetric_check: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            calibration: CalibrationMap::default(),
            panel_width: 240,
            panel_height: 320,
            min_raw: 100,
            max_raw: 4000,
            max_jitter: 50,
            settle_ms: 2,
            symmetric_check: false,
        }
    }
}

impl TouchConfig {
    /// Default thresholds with a board-specific calibration
    pub fn with_calibration(calibration: CalibrationMap) -> Self {
        Self {
            calibration,
            ..Self::default()
        }
    }
}
