//! Time source abstraction

/// Monotonic millisecond clock with a blocking sleep
///
/// The drivers never look at wall time; they only need to block for the
/// settle delays the panel and digitizer require.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin
    fn now_ms(&self) -> u64;

    /// Block the caller for at least `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&self) -> u64 {
        T::now_ms(self)
    }

    fn sleep_ms(&mut self, ms: u32) {
        T::sleep_ms(self, ms)
    }
}
