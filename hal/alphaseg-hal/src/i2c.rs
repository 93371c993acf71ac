//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by chip-specific HALs.

use core::cell::RefCell;

/// I2C bus master
///
/// Display backpacks are write-only, so the trait only needs single write
/// transactions.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// Handle to a bus shared between several device drivers
///
/// Every backpack module in a display row sits on the same two wires, but each
/// window driver wants to own "its" bus. All drivers run on one cooperative
/// executor, so a `RefCell` borrow per transaction is enough: a borrow can
/// never be held across a yield point because [`I2cBus`] is blocking.
pub struct SharedI2c<'a, B> {
    bus: &'a RefCell<B>,
}

impl<'a, B> SharedI2c<'a, B> {
    /// Create a handle to a shared bus
    pub const fn new(bus: &'a RefCell<B>) -> Self {
        Self { bus }
    }
}

impl<B> Clone for SharedI2c<'_, B> {
    fn clone(&self) -> Self {
        Self { bus: self.bus }
    }
}

impl<B: I2cBus> I2cBus for SharedI2c<'_, B> {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.borrow_mut().write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl I2cConfig {
    /// Fast mode (400 kHz, the HT16K33 maximum)
    pub const FAST: Self = Self { frequency: 400_000 };
}
