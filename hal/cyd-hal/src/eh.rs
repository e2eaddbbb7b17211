//! Adapters from embedded-hal 1.0 types to the cyd-hal traits
//!
//! Board crates usually already hold an `embedded_hal::spi::SpiBus`, a set
//! of `OutputPin`s and a `DelayNs`. Wrapping them here is all it takes to
//! hand them to the drivers.
//!
//! ```ignore
//! let mut bus = SpiTransport::new(spi);
//! let mut clock = DelayClock::new(delay, uptime_ms);
//! let mut display = Ili9341::new(Line::new(dc), Line::new(cs), Some(Line::new(rst)), config);
//! display.begin(&mut bus, &mut clock)?;
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::{Clock, OutputLine, Transport};

/// [`Transport`] over an embedded-hal SPI bus (chip-select managed by the driver)
#[derive(Debug)]
pub struct SpiTransport<B> {
    bus: B,
}

impl<B> SpiTransport<B> {
    /// Wrap an SPI bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: SpiBus<u8>> Transport for SpiTransport<B> {
    type Error = B::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(data)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.bus.transfer(read, write)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.bus.flush()
    }
}

/// [`OutputLine`] over an embedded-hal output pin
///
/// Only pins that cannot fail are accepted, which covers every on-chip
/// GPIO of the supported MCUs.
#[derive(Debug)]
pub struct Line<P> {
    pin: P,
}

impl<P> Line<P> {
    /// Wrap an output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin<Error = Infallible>> OutputLine for Line<P> {
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {})
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {})
    }
}

/// [`Clock`] built from an embedded-hal delay and an uptime source
#[derive(Debug)]
pub struct DelayClock<D> {
    delay: D,
    uptime_ms: fn() -> u64,
}

impl<D> DelayClock<D> {
    /// Create a clock from a delay provider and a monotonic uptime function
    pub fn new(delay: D, uptime_ms: fn() -> u64) -> Self {
        Self { delay, uptime_ms }
    }
}

impl<D: DelayNs> Clock for DelayClock<D> {
    fn now_ms(&self) -> u64 {
        (self.uptime_ms)()
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
