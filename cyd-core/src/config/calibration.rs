//! Two-point touch calibration
//!
//! The digitizer reports raw 12-bit readings whose orientation and scale
//! depend on how the film was laminated onto the panel. Two raw readings
//! taken at known screen corners are enough to map each axis linearly.
//! Rotation between the film and the panel is not corrected.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::TouchPoint;

/// Raw readings at the two reference corners
///
/// `(raw_x0, raw_y0)` is what the digitizer reports at screen (0, 0) and
/// `(raw_x1, raw_y1)` at (panel width, panel height). Either axis may run
/// backwards (`raw_*1 < raw_*0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationMap {
    pub raw_x0: u16,
    pub raw_y0: u16,
    pub raw_x1: u16,
    pub raw_y1: u16,
}

impl Default for CalibrationMap {
    fn default() -> Self {
        Self::ESP32_2432S028
    }
}

impl CalibrationMap {
    /// Measured on the stock ESP32-2432S028 board (Y axis runs backwards)
    pub const ESP32_2432S028: Self = Self::new(768, 3684, 3472, 357);

    pub const fn new(raw_x0: u16, raw_y0: u16, raw_x1: u16, raw_y1: u16) -> Self {
        Self {
            raw_x0,
            raw_y0,
            raw_x1,
            raw_y1,
        }
    }

    /// Map a raw reading to screen pixels, clipped to the panel
    ///
    /// Output is within `[0, panel_width] × [0, panel_height]` for any
    /// input, including readings outside the calibrated range.
    pub fn normalize(&self, raw_x: u16, raw_y: u16, panel_width: u16, panel_height: u16) -> TouchPoint {
        TouchPoint::new(
            map_axis(raw_x, self.raw_x0, self.raw_x1, panel_width),
            map_axis(raw_y, self.raw_y0, self.raw_y1, panel_height),
        )
    }
}

/// Linear map of one axis, truncating toward zero, then clipped to `[0, span]`
///
/// A degenerate reference pair (both readings equal) maps everything to 0.
fn map_axis(raw: u16, raw0: u16, raw1: u16, span: u16) -> u16 {
    let denom = raw1 as i64 - raw0 as i64;
    if denom == 0 {
        return 0;
    }

    let scaled = (raw as i64 - raw0 as i64) * span as i64 / denom;
    scaled.clamp(0, span as i64) as u16
}
