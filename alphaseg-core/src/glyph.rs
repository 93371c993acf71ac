//! 14-segment glyph lookup
//!
//! Segment bit assignment follows the HT16K33 backpack wiring:
//!
//! ```text
//!      ---A---         bit  0..=5   A B C D E F
//!     |\  |  /|        bit  6       G1 (left middle)
//!     F H J K B        bit  7       G2 (right middle)
//!     |  \|/  |        bit  8..=10  H J K
//!      G1- -G2         bit 11..=13  L M N
//!     |  /|\  |        bit 14       DP
//!     E N M L C
//!     |/  |  \|
//!      ---D---  DP
//! ```

/// Decimal point modifier bit, OR-ed onto the preceding character's pattern
pub const DECIMAL_POINT: u16 = 0x4000;

/// Pattern for an unlit cell
pub const BLANK: u16 = 0x0000;

/// Segment patterns indexed by ASCII code
///
/// Codes 0x00..=0x0F light a single segment each (handy for wiring tests),
/// 0x7F lights every segment except the decimal point.
#[rustfmt::skip]
pub static FONT: [u16; 128] = [
    0x0001, 0x0002, 0x0004, 0x0008, 0x0010, 0x0020, 0x0040, 0x0080, // 0x00..=0x07
    0x0100, 0x0200, 0x0400, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, // 0x08..=0x0F
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // 0x10..=0x17
    0x12C9, 0x15C0, 0x12F9, 0x00E3, 0x0530, 0x12C8, 0x3A00, 0x1700, // 0x18..=0x1F
    0x0000, 0x0006, 0x0220, 0x12CE, 0x12ED, 0x0C24, 0x235D, 0x0400, // ' '..='\''
    0x2400, 0x0900, 0x3FC0, 0x12C0, 0x0800, 0x00C0, 0x4000, 0x0C00, // '('..='/'
    0x0C3F, 0x0006, 0x00DB, 0x008F, 0x00E6, 0x2069, 0x00FD, 0x0007, // '0'..='7'
    0x00FF, 0x00EF, 0x1200, 0x0A00, 0x2400, 0x00C8, 0x0900, 0x1083, // '8'..='?'
    0x02BB, 0x00F7, 0x128F, 0x0039, 0x120F, 0x00F9, 0x0071, 0x00BD, // '@'..='G'
    0x00F6, 0x1209, 0x001E, 0x2470, 0x0038, 0x0536, 0x2136, 0x003F, // 'H'..='O'
    0x00F3, 0x203F, 0x20F3, 0x00ED, 0x1201, 0x003E, 0x0C30, 0x2836, // 'P'..='W'
    0x2D00, 0x1500, 0x0C09, 0x0039, 0x2100, 0x000F, 0x0C03, 0x0008, // 'X'..='_'
    0x0100, 0x1058, 0x2078, 0x00D8, 0x088E, 0x0858, 0x0071, 0x048E, // '`'..='g'
    0x1070, 0x1000, 0x000E, 0x3600, 0x0030, 0x10D4, 0x1050, 0x00DC, // 'h'..='o'
    0x0170, 0x0486, 0x0050, 0x2088, 0x0078, 0x001C, 0x2004, 0x2814, // 'p'..='w'
    0x28C0, 0x200C, 0x0848, 0x0949, 0x1200, 0x2489, 0x0520, 0x3FFF, // 'x'..=0x7F
];

/// Look up the segment pattern for one input byte
///
/// Bytes outside the 7-bit ASCII range render as a blank cell.
#[inline]
pub fn encode(byte: u8) -> u16 {
    FONT.get(byte as usize).copied().unwrap_or(BLANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_bytes_are_blank() {
        for byte in 128..=255u8 {
            assert_eq!(encode(byte), BLANK);
        }
    }

    #[test]
    fn test_patterns_stay_within_fifteen_bits() {
        // The first sixteen codes are single-segment test patterns and code
        // 0x0F deliberately lights the unused top bit.
        for byte in 0x10..=0x7Fu8 {
            assert_eq!(encode(byte) & 0x8000, 0, "byte {:#04x}", byte);
        }
    }

    #[test]
    fn test_known_glyphs() {
        assert_eq!(encode(b' '), BLANK);
        assert_eq!(encode(b'1'), 0x0006);
        assert_eq!(encode(b'A'), 0x00F7);
        assert_eq!(encode(b'.'), DECIMAL_POINT);
        assert_eq!(encode(0x7F), 0x3FFF);
    }
}
