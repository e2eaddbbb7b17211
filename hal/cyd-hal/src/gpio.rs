//! Digital output line abstractions
//!
//! Chip-select, data/command and reset are all plain push-pull outputs.
//! Driving them cannot fail on any board we target, so the trait is
//! infallible.

/// Digital output line
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputLine {
    /// Set the line high (logic 1)
    fn set_high(&mut self);

    /// Set the line low (logic 0)
    fn set_low(&mut self);

    /// Set the line to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Put the line into output mode at the given idle level
    ///
    /// Boards whose pins are already outputs by construction only need
    /// to drive the level, which is the default.
    fn configure_output(&mut self, high: bool) {
        self.set_state(high);
    }
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn configure_output(&mut self, high: bool) {
        T::configure_output(self, high)
    }
}

/// Placeholder for a line that is not wired
///
/// Used as the reset line type when the panel's reset pin is tied high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoLine;

impl OutputLine for NoLine {
    fn set_high(&mut self) {}

    fn set_low(&mut self) {}
}
