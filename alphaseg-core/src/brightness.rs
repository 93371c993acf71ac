//! Brightness mapping
//!
//! The HT16K33 has sixteen PWM duty levels. A requested brightness in
//! `[0, 1]` is scaled to `0..=16`, where 0 turns the display off and
//! `1..=16` select duty `level/16`.

use heapless::Vec;

use crate::traits::command;

/// Number of duty steps
pub const LEVELS: u8 = 16;

/// Brightness level in `0..=16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl Brightness {
    /// Display powered off
    pub const OFF: Self = Self(0);

    /// Full duty
    pub const MAX: Self = Self(LEVELS);

    /// Scale a fractional brightness to a level
    ///
    /// Rounds half away from zero and clamps silently; NaN maps to off.
    pub fn from_fraction(level: f32) -> Self {
        let scaled = level * LEVELS as f32;
        if scaled.is_nan() || scaled <= 0.0 {
            return Self::OFF;
        }
        let scaled = scaled.min(LEVELS as f32);
        // Round on the fractional part; `+ 0.5` would carry 0.49999997 to 1
        let whole = scaled as u8;
        let rounded = if scaled - whole as f32 >= 0.5 { whole + 1 } else { whole };
        Self(rounded.min(LEVELS))
    }

    /// Raw level in `0..=16`
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Level as a fraction in `[0, 1]`
    pub fn as_fraction(self) -> f32 {
        self.0 as f32 / LEVELS as f32
    }

    /// Whether this level powers the display off
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Commands that apply this level to one window, in order
    pub fn commands(self) -> Vec<u8, 2> {
        let mut cmds = Vec::new();
        if self.is_off() {
            let _ = cmds.push(command::DISPLAY_OFF);
        } else {
            let _ = cmds.push(command::dimming(self.0));
            let _ = cmds.push(command::DISPLAY_ON);
        }
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_rounding() {
        assert_eq!(Brightness::from_fraction(0.5).level(), 8);
        assert_eq!(Brightness::from_fraction(1.0).level(), 16);
        assert_eq!(Brightness::from_fraction(0.0).level(), 0);
        // 0.03 * 16 = 0.48 rounds down, 0.035 * 16 = 0.56 rounds up
        assert_eq!(Brightness::from_fraction(0.03).level(), 0);
        assert_eq!(Brightness::from_fraction(0.035).level(), 1);
    }

    #[test]
    fn test_just_below_half_step_stays_off() {
        // 0.031249998 * 16 is the largest f32 below 0.5
        assert_eq!(Brightness::from_fraction(0.031249998).level(), 0);
        assert_eq!(Brightness::from_fraction(0.03125).level(), 1);
        assert_eq!(Brightness::from_fraction(0.96875).level(), 16);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Brightness::from_fraction(-3.0), Brightness::OFF);
        assert_eq!(Brightness::from_fraction(7.5), Brightness::MAX);
        assert_eq!(Brightness::from_fraction(f32::INFINITY), Brightness::MAX);
        assert_eq!(Brightness::from_fraction(f32::NAN), Brightness::OFF);
    }

    #[test]
    fn test_fraction_round_trip() {
        assert_eq!(Brightness::from_fraction(0.5).as_fraction(), 0.5);
        assert_eq!(Brightness::OFF.as_fraction(), 0.0);
    }

    #[test]
    fn test_commands() {
        assert_eq!(Brightness::OFF.commands().as_slice(), &[command::DISPLAY_OFF]);
        assert_eq!(
            Brightness::from_fraction(0.5).commands().as_slice(),
            &[command::DIMMING + 7, command::DISPLAY_ON]
        );
    }
}
