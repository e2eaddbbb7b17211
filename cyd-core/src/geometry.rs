//! Panel-space geometry
//!
//! All coordinates are pixels with the origin at the top-left corner of the
//! panel in its configured orientation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive addressing window on the panel
///
/// A pixel stream written after the window is set fills it row by row,
/// left to right, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Create a window from inclusive corners
    ///
    /// Callers keep `x0 <= x1` and `y0 <= y1`.
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Columns covered
    ///
    /// An inverted window counts the same columns as its ordered twin.
    pub const fn width(&self) -> u32 {
        self.x1.abs_diff(self.x0) as u32 + 1
    }

    /// Rows covered
    pub const fn height(&self) -> u32 {
        self.y1.abs_diff(self.y0) as u32 + 1
    }

    /// Number of pixels a stream must supply to fill the window
    ///
    /// Saturates for a window spanning the whole u16 range on both axes.
    pub const fn pixel_count(&self) -> u32 {
        self.width().saturating_mul(self.height())
    }

    /// Whether the window lies inside a panel of the given size
    pub const fn fits(&self, panel_width: u16, panel_height: u16) -> bool {
        self.x0 <= self.x1
            && self.y0 <= self.y1
            && self.x1 < panel_width
            && self.y1 < panel_height
    }

    /// Trim the far corner onto the panel
    ///
    /// Returns `None` if the window is inverted or starts off the panel.
    pub fn clipped(&self, panel_width: u16, panel_height: u16) -> Option<Self> {
        if self.x0 > self.x1
            || self.y0 > self.y1
            || self.x0 >= panel_width
            || self.y0 >= panel_height
        {
            return None;
        }

        Some(Self::new(
            self.x0,
            self.y0,
            self.x1.min(panel_width - 1),
            self.y1.min(panel_height - 1),
        ))
    }

    /// Clip a requested rectangle to the panel
    ///
    /// The origin is clamped onto the panel, then the size is clamped to at
    /// least one pixel and at most what remains to the right of / below the
    /// origin. Returns `None` only when nothing is left to draw, which
    /// happens for a zero-sized panel.
    pub fn clip_rect(
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        panel_width: u16,
        panel_height: u16,
    ) -> Option<Self> {
        let pw = panel_width as i32;
        let ph = panel_height as i32;

        let x = x.clamp(0, (pw - 1).max(0));
        let y = y.clamp(0, (ph - 1).max(0));
        let w = w.max(1).min(pw - x);
        let h = h.max(1).min(ph - y);

        if w <= 0 || h <= 0 {
            return None;
        }

        Some(Self::new(
            x as u16,
            y as u16,
            (x + w - 1) as u16,
            (y + h - 1) as u16,
        ))
    }

    /// A `size`×`size` cell with its top-left corner at (x, y)
    ///
    /// Returns `None` unless the whole cell is on the panel.
    pub fn cell(x: i32, y: i32, size: u16, panel_width: u16, panel_height: u16) -> Option<Self> {
        let size = size as i32;
        if size == 0 || x < 0 || y < 0 {
            return None;
        }
        if x > panel_width as i32 - size || y > panel_height as i32 - size {
            return None;
        }

        Some(Self::new(
            x as u16,
            y as u16,
            (x + size - 1) as u16,
            (y + size - 1) as u16,
        ))
    }
}

/// A calibrated touch position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
