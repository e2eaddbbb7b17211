//! Serial transport abstraction
//!
//! The drivers only need two primitives from the bus: push bytes out, and
//! push bytes out while clocking the same number of bytes back in. Chip
//! select is not part of the transport; each driver owns its own line.

/// Duplex byte transport (an SPI master without chip-select)
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Transfer data (simultaneous read/write)
    ///
    /// Writes `write` while reading into `read`. Callers pass buffers of
    /// equal length.
    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error>;

    /// Wait until every queued byte has left the shift register
    ///
    /// Drivers call this before deasserting chip-select. Transports that
    /// complete synchronously can keep the default.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        T::transfer(self, read, write)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        T::flush(self)
    }
}
