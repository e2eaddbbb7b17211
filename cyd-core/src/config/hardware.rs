//! Board wiring descriptions
//!
//! Pin numbers and bus clocks a board crate needs to build the transports
//! and lines it hands to the drivers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One SPI bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusPins {
    pub sck: u8,
    pub mosi: u8,
    /// Not wired on write-only buses
    pub miso: Option<u8>,
    /// Clock frequency in Hz
    pub frequency_hz: u32,
}

/// Display panel wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    pub bus: BusPins,
    /// Data/command select
    pub dc: u8,
    /// Chip select (active low)
    pub cs: u8,
    /// Reset (active low), if wired
    pub rst: Option<u8>,
    /// Backlight enable / PWM, if wired
    pub backlight: Option<u8>,
}

/// Touch digitizer wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchPins {
    pub bus: BusPins,
    /// Chip select (active low)
    pub cs: u8,
    /// PENIRQ, if wired (the drivers poll and never read it)
    pub irq: Option<u8>,
}

/// Complete board wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub display: DisplayPins,
    pub touch: TouchPins,
}

impl BoardConfig {
    /// ESP32-2432S028: panel on hardware SPI, digitizer on its own bit-banged bus
    pub const ESP32_2432S028: Self = Self {
        display: DisplayPins {
            bus: BusPins {
                sck: 14,
                mosi: 13,
                miso: None,
                frequency_hz: 40_000_000,
            },
            dc: 2,
            cs: 15,
            rst: Some(12),
            backlight: Some(21),
        },
        touch: TouchPins {
            bus: BusPins {
                sck: 25,
                mosi: 32,
                miso: Some(39),
                frequency_hz: 1_000_000,
            },
            cs: 33,
            irq: None,
        },
    };

    /// Whether display and touch share one set of bus pins
    ///
    /// When they do, the application must create a single transport and
    /// lend it to both drivers in turn.
    pub fn shares_bus(&self) -> bool {
        self.display.bus.sck == self.touch.bus.sck && self.display.bus.mosi == self.touch.bus.mosi
    }
}
