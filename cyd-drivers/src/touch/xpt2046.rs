//! XPT2046 resistive touch controller
//!
//! Polled; the PENIRQ line is not used. Each poll costs six conversions and
//! two settle delays when a finger is down, one conversion pair otherwise.

use cyd_core::touch::{ConsensusFilter, RawSample};
use cyd_core::{CalibrationMap, TouchConfig, TouchPoint};
use cyd_hal::{Clock, OutputLine, Transport};
use cyd_protocol::touch::{control, conversion_request};
use cyd_protocol::{decode_response, CONVERSION_FRAME_LEN};

/// XPT2046 touch driver
pub struct Xpt2046<CS> {
    cs: CS,
    config: TouchConfig,
    filter: ConsensusFilter,
}

impl<CS: OutputLine> Xpt2046<CS> {
    /// Create a driver and deselect the chip
    pub fn new(mut cs: CS, config: TouchConfig) -> Self {
        cs.configure_output(true);
        Self {
            cs,
            config,
            filter: ConsensusFilter::from_config(&config),
        }
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    pub fn calibration(&self) -> CalibrationMap {
        self.config.calibration
    }

    /// Run one conversion and return the decoded reading
    pub fn read_channel<B: Transport>(&mut self, bus: &mut B, control_byte: u8) -> Result<u16, B::Error> {
        let request = conversion_request(control_byte);
        let mut response = [0u8; CONVERSION_FRAME_LEN];

        self.cs.set_low();
        let result = bus
            .transfer(&mut response, &request)
            .and_then(|()| bus.flush());
        self.cs.set_high();

        result.map(|()| decode_response(&response))
    }

    /// Read X then Y
    ///
    /// Returns [`RawSample::NONE`] if either reading is outside the
    /// configured raw window.
    pub fn sample<B: Transport>(&mut self, bus: &mut B) -> Result<RawSample, B::Error> {
        let x = self.read_channel(bus, control::READ_X)?;
        let y = self.read_channel(bus, control::READ_Y)?;
        Ok(RawSample::from_readings(x, y, self.config.min_raw, self.config.max_raw))
    }

    /// Poll for a steady press
    ///
    /// Takes up to three samples `settle_ms` apart and returns the
    /// calibrated average only if they agree. `Ok(None)` means no press, a
    /// press too brief to trust, or a press still moving.
    pub fn get_touch<B, C>(&mut self, bus: &mut B, clock: &mut C) -> Result<Option<TouchPoint>, B::Error>
    where
        B: Transport,
        C: Clock,
    {
        let first = self.sample(bus)?;
        if first.is_none() {
            return Ok(None);
        }

        clock.sleep_ms(self.config.settle_ms);
        let second = self.sample(bus)?;
        clock.sleep_ms(self.config.settle_ms);
        let third = self.sample(bus)?;

        match self.filter.evaluate(first, second, third) {
            Ok(raw) => {
                let point = self.normalize(raw.x, raw.y);
                #[cfg(feature = "defmt")]
                defmt::trace!("touch raw={} screen={}", raw, point);
                Ok(Some(point))
            }
            Err(_rejection) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("touch rejected: {}", _rejection);
                Ok(None)
            }
        }
    }

    /// Map a raw reading to screen pixels using the current calibration
    pub fn normalize(&self, raw_x: u16, raw_y: u16) -> TouchPoint {
        self.config.calibration.normalize(
            raw_x,
            raw_y,
            self.config.panel_width,
            self.config.panel_height,
        )
    }

    pub fn release(self) -> CS {
        self.cs
    }
}
