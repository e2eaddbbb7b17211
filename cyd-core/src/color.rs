//! RGB565 colors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pack 8-bit RGB into 5-6-5
///
/// The low bits of each channel are dropped, not rounded.
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// A 16-bit 5-6-5 color as the panel expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const GREY: Self = Self::new(50, 50, 50);
    pub const LIGHT_GREY: Self = Self::new(100, 100, 100);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const GOLD: Self = Self::new(255, 215, 0);
    pub const ORANGE: Self = Self::new(255, 165, 0);
    pub const PURPLE: Self = Self::new(128, 0, 128);
    pub const BROWN: Self = Self::new(165, 42, 42);

    /// Pack an 8-bit-per-channel color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(color565(r, g, b))
    }

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire encoding, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}
