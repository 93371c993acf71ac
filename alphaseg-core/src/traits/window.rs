//! Display window trait
//!
//! A window is one physical 4-character backpack module. The controller
//! treats it as an opaque sink for a command byte plus an optional payload.

/// Bytes of display RAM per window (8 bytes = 4 characters × 2 bytes,
/// the rest of the HT16K33's 16-byte RAM is unused by 14-segment modules)
pub const WINDOW_BYTES: usize = 8;

/// HT16K33 command opcodes
///
/// The first set bit of the opcode selects the command, the bits after it
/// carry the command's argument.
pub mod command {
    /// Set display RAM address; followed by the data to write
    pub const SET_DDRAM_ADDR: u8 = 0x00;
    /// System setup: turn on the internal oscillator
    pub const SYSTEM_SETUP: u8 = 0x21;
    /// Display off, blinking off
    pub const DISPLAY_OFF: u8 = 0x80;
    /// Display on, blinking off
    pub const DISPLAY_ON: u8 = 0x81;
    /// Dimming set; low nibble is the duty level (0 = 1/16 .. 15 = 16/16)
    pub const DIMMING: u8 = 0xE0;

    /// Dimming command for a brightness level in `1..=16`
    pub const fn dimming(level: u8) -> u8 {
        DIMMING | (level.saturating_sub(1) & 0x0F)
    }
}

/// A single display window
///
/// Implementations push `opcode` followed by `payload` to one module. The
/// payload is empty for every command except [`command::SET_DDRAM_ADDR`].
pub trait DisplayWindow {
    /// Transport error
    type Error;

    /// Send one command with its payload
    fn send_command(&mut self, opcode: u8, payload: &[u8]) -> Result<(), Self::Error>;
}

impl<W: DisplayWindow + ?Sized> DisplayWindow for &mut W {
    type Error = W::Error;

    fn send_command(&mut self, opcode: u8, payload: &[u8]) -> Result<(), Self::Error> {
        (**self).send_command(opcode, payload)
    }
}
