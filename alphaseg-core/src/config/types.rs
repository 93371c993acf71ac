//! Configuration type definitions

use heapless::String;

pub use crate::scroll::ScrollConfig;
use crate::traits::WINDOW_BYTES;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum windows in one display row (HT16K33 addresses 0x70..=0x77)
pub const MAX_WINDOWS: usize = 8;

/// Maximum continuous scroll spacer length
pub const MAX_SPACER_LEN: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No display windows given
    NoWindows,
    /// More than [`MAX_WINDOWS`] windows given
    TooManyWindows,
    /// Number of windows differs from the configured count
    WindowCountMismatch,
    /// Buffer capacity smaller than the display row
    BufferTooSmall,
    /// Buffer capacity is not a whole number of cells
    OddBufferCapacity,
    /// Continuous scroll enabled with a zero visible length
    ZeroVisibleLength,
    /// Initial brightness outside `[0, 1]`
    BrightnessOutOfRange,
}

/// Continuous (looping) scroll configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContinuousScrollConfig {
    /// Rewrite long messages so the scroll loops seamlessly
    pub enabled: bool,
    /// Text placed between the end and the repeated start
    pub spacer: String<MAX_SPACER_LEN>,
    /// Cells of the message start repeated after the spacer; also the
    /// length above which a message is rewritten at all
    pub visible_len: u8,
}

impl Default for ContinuousScrollConfig {
    fn default() -> Self {
        let mut spacer = String::new();
        let _ = spacer.push('*');
        Self {
            enabled: false,
            spacer,
            visible_len: 8,
        }
    }
}

/// Display row configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Number of 4-character windows in the row
    pub windows: u8,
    /// Brightness applied by `setup()` (`0.0..=1.0`)
    pub brightness: f32,
    /// Scroll timing
    pub scroll: ScrollConfig,
    /// Continuous scroll
    pub continuous: ContinuousScrollConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DisplayConfig {
    /// Default configuration for a row of `windows` modules
    pub fn new(windows: u8) -> Self {
        Self {
            windows,
            brightness: 1.0,
            scroll: ScrollConfig::default(),
            continuous: ContinuousScrollConfig::default(),
        }
    }

    /// Width of the row in buffer bytes
    pub fn visible_bytes(&self) -> usize {
        self.windows as usize * WINDOW_BYTES
    }

    /// Check the configuration on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.windows == 0 {
            return Err(ConfigError::NoWindows);
        }
        if self.windows as usize > MAX_WINDOWS {
            return Err(ConfigError::TooManyWindows);
        }
        if self.continuous.enabled && self.continuous.visible_len == 0 {
            return Err(ConfigError::ZeroVisibleLength);
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        Ok(())
    }

    /// Check the configuration against a buffer of `capacity` bytes
    pub fn validate_capacity(&self, capacity: usize) -> Result<(), ConfigError> {
        self.validate()?;
        if capacity % 2 != 0 {
            return Err(ConfigError::OddBufferCapacity);
        }
        if capacity < self.visible_bytes() {
            return Err(ConfigError::BufferTooSmall);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DisplayConfig::new(2);
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.visible_bytes(), 16);
        assert_eq!(config.continuous.spacer.as_str(), "*");
    }

    #[test]
    fn test_window_count_limits() {
        assert_eq!(DisplayConfig::new(0).validate(), Err(ConfigError::NoWindows));
        assert_eq!(DisplayConfig::new(9).validate(), Err(ConfigError::TooManyWindows));
    }

    #[test]
    fn test_capacity_checks() {
        let config = DisplayConfig::new(2);
        assert_eq!(config.validate_capacity(16), Ok(()));
        assert_eq!(config.validate_capacity(64), Ok(()));
        assert_eq!(config.validate_capacity(15), Err(ConfigError::OddBufferCapacity));
        assert_eq!(config.validate_capacity(8), Err(ConfigError::BufferTooSmall));
    }

    #[test]
    fn test_continuous_needs_visible_len() {
        let mut config = DisplayConfig::new(1);
        config.continuous.visible_len = 0;
        assert_eq!(config.validate(), Ok(()));

        config.continuous.enabled = true;
        assert_eq!(config.validate(), Err(ConfigError::ZeroVisibleLength));
    }

    #[test]
    fn test_brightness_range() {
        let mut config = DisplayConfig::new(1);
        config.brightness = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::BrightnessOutOfRange));
        config.brightness = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::BrightnessOutOfRange));
    }
}
