//! HT16K33 LED controller (I2C)
//!
//! The HT16K33 drives up to 16×8 LEDs; a 4-character 14-segment backpack
//! uses the first 8 bytes of its display RAM, two per character.
//!
//! # I2C Protocol
//!
//! Every command is a single write transaction to the 7-bit address
//! (0x70 + A2..A0 jumpers):
//! - Command byte (opcode, see [`alphaseg_core::traits::command`])
//! - Payload: display RAM bytes, only after "set display RAM address"
//!
//! The display RAM address auto-increments, so one write of
//! `[0x00, d0..d7]` refreshes all four characters.

use alphaseg_core::traits::DisplayWindow;
use alphaseg_hal::I2cBus;

/// Address with all jumpers open
pub const BASE_ADDRESS: u8 = 0x70;

/// Display RAM size in bytes
pub const RAM_BYTES: usize = 16;

/// HT16K33 window errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ht16k33Error<E> {
    /// Bus transaction failed
    Bus(E),
    /// Payload larger than the display RAM
    PayloadTooLong,
}

/// One HT16K33 backpack
pub struct Ht16k33<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> Ht16k33<B> {
    /// Create a driver for the module at `address`
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Create a driver for the module with jumper setting `index` (0-7)
    pub fn at_index(bus: B, index: u8) -> Self {
        Self::new(bus, BASE_ADDRESS | (index & 0x07))
    }

    /// 7-bit I2C address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus + Clone> Ht16k33<B> {
    /// Drivers for `count` modules at consecutive addresses from 0x70
    ///
    /// Use with a cloneable bus handle such as [`alphaseg_hal::SharedI2c`].
    pub fn row(bus: B, count: u8) -> impl Iterator<Item = Self> {
        (0..count).map(move |index| Self::at_index(bus.clone(), index))
    }
}

impl<B: I2cBus> DisplayWindow for Ht16k33<B> {
    type Error = Ht16k33Error<B::Error>;

    fn send_command(&mut self, opcode: u8, payload: &[u8]) -> Result<(), Self::Error> {
        if payload.len() > RAM_BYTES {
            return Err(Ht16k33Error::PayloadTooLong);
        }
        let mut frame = [0u8; RAM_BYTES + 1];
        frame[0] = opcode;
        frame[1..=payload.len()].copy_from_slice(payload);
        self.bus
            .write(self.address, &frame[..=payload.len()])
            .map_err(Ht16k33Error::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphaseg_core::traits::command;
    use heapless::Vec;

    #[derive(Default)]
    struct MockBus {
        writes: Vec<(u8, Vec<u8, 17>), 8>,
        nack: bool,
    }

    impl I2cBus for MockBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.nack {
                return Err(());
            }
            let _ = self.writes.push((address, Vec::from_slice(data).unwrap()));
            Ok(())
        }
    }

    #[test]
    fn test_command_without_payload() {
        let mut window = Ht16k33::new(MockBus::default(), 0x70);
        window.send_command(command::SYSTEM_SETUP, &[]).unwrap();

        let bus = window.release();
        assert_eq!(bus.writes[0].0, 0x70);
        assert_eq!(bus.writes[0].1.as_slice(), &[0x21]);
    }

    #[test]
    fn test_ram_write_is_one_transaction() {
        let mut window = Ht16k33::at_index(MockBus::default(), 3);
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        window.send_command(command::SET_DDRAM_ADDR, &data).unwrap();

        assert_eq!(window.address(), 0x73);
        let bus = window.release();
        assert_eq!(bus.writes.len(), 1);
        assert_eq!(bus.writes[0].1.as_slice(), &[0x00, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_payload_limit() {
        let mut window = Ht16k33::new(MockBus::default(), 0x70);
        assert_eq!(
            window.send_command(command::SET_DDRAM_ADDR, &[0; 17]),
            Err(Ht16k33Error::PayloadTooLong)
        );
        assert!(window.send_command(command::SET_DDRAM_ADDR, &[0; 16]).is_ok());
    }

    #[test]
    fn test_bus_error_is_wrapped() {
        let bus = MockBus {
            nack: true,
            ..Default::default()
        };
        let mut window = Ht16k33::new(bus, 0x70);
        assert_eq!(
            window.send_command(command::DISPLAY_ON, &[]),
            Err(Ht16k33Error::Bus(()))
        );
    }

    #[test]
    fn test_index_is_masked_to_jumper_range() {
        assert_eq!(Ht16k33::at_index(MockBus::default(), 9).address(), 0x71);
    }
}
