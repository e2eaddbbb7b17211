//! Hardware drivers for the ESP32-2432S028 class of boards
//!
//! This crate provides the two bus devices found on these boards, written
//! against the traits in cyd-hal:
//!
//! - [`Ili9341`] - 240x320 RGB565 TFT controller (write-only)
//! - [`Xpt2046`] - 12-bit resistive touch controller (polled)
//!
//! Both take the bus as `&mut` on every call. When they share one bus the
//! caller simply passes the same transport to each in turn; the borrow
//! checker keeps their transactions from interleaving.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod mock;

pub mod display;
pub mod touch;

pub use display::Ili9341;
pub use touch::Xpt2046;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_log, Event, LineId, MockBus, MockClock, MockLine};
    use cyd_core::{DisplayConfig, Rgb565, TouchConfig, TouchPoint};

    #[test]
    fn test_shared_bus_never_selects_both() {
        let log = new_log();
        let mut display = Ili9341::new(
            MockLine::new(LineId::Dc, &log),
            MockLine::new(LineId::DisplayCs, &log),
            Some(MockLine::new(LineId::Rst, &log)),
            DisplayConfig::default(),
        );
        let mut touch = Xpt2046::new(MockLine::new(LineId::TouchCs, &log), TouchConfig::default());
        let mut bus = MockBus::with_readings(&log, &[2110, 2010, 2130, 2030, 2120, 2020]);
        let mut clock = MockClock::new(&log);

        display.begin(&mut bus, &mut clock).unwrap();
        display.fill_screen(&mut bus, Rgb565::BLACK).unwrap();
        let point = touch.get_touch(&mut bus, &mut clock).unwrap();
        display.draw_text(&mut bus, "OK", 0, 0, Rgb565::GREEN, None).unwrap();

        assert_eq!(point, Some(TouchPoint::new(120, 160)));

        let (mut display_selected, mut touch_selected) = (false, false);
        for event in log.borrow().iter() {
            match event {
                Event::Line(LineId::DisplayCs, level) => display_selected = !level,
                Event::Line(LineId::TouchCs, level) => touch_selected = !level,
                Event::Write(_) => assert!(display_selected && !touch_selected),
                Event::Transfer(_) => assert!(touch_selected && !display_selected),
                _ => {}
            }
            assert!(!(display_selected && touch_selected));
        }
    }
}
