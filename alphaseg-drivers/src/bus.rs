//! embedded-hal bus adapter
//!
//! Lets any blocking `embedded-hal` 1.0 I2C master (embassy-rp, rp2040-hal,
//! linux-embedded-hal, ...) be used where an [`I2cBus`] is expected.

use alphaseg_hal::I2cBus;
use embedded_hal::i2c::I2c;

/// Wrapper implementing [`I2cBus`] for an `embedded_hal::i2c::I2c`
pub struct EmbeddedHalI2c<T>(pub T);

impl<T> EmbeddedHalI2c<T> {
    /// Wrap an I2C master
    pub const fn new(i2c: T) -> Self {
        Self(i2c)
    }

    /// Unwrap the I2C master
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: I2c> I2cBus for EmbeddedHalI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::i2c::{ErrorType, Operation};
    use heapless::Vec;

    #[derive(Default)]
    struct MockI2c {
        written: Vec<(u8, Vec<u8, 17>), 4>,
    }

    impl ErrorType for MockI2c {
        type Error = Infallible;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        let _ = self.written.push((address, Vec::from_slice(bytes).unwrap()));
                    }
                    Operation::Read(buf) => buf.fill(0x5A),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_adapter_forwards() {
        let mut bus = EmbeddedHalI2c::new(MockI2c::default());
        bus.write(0x70, &[0x81]).unwrap();

        let inner = bus.into_inner();
        assert_eq!(inner.written[0].0, 0x70);
        assert_eq!(inner.written[0].1.as_slice(), &[0x81]);
    }
}
