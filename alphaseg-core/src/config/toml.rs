//! Simple TOML parser for display configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! a display row configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, float, boolean)
//! - `[display]`, `[scroll]` and `[continuous_scroll]` section headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Multi-line strings
//! - Escape sequences in strings
//! - Arrays and inline tables
//!
//! Unknown keys are ignored so newer config files still load.

use heapless::String;

use super::types::{DisplayConfig, MAX_SPACER_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// String longer than its fixed capacity
    ValueTooLong,
    /// Line is neither a header, a comment nor `key = value`
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Scroll,
    ContinuousScroll,
}

/// Parse TOML text into a [`DisplayConfig`]
///
/// Keys not present keep their defaults. The result is not validated; call
/// [`DisplayConfig::validate`] or let the controller do it.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "scroll" => Ok(Section::Scroll),
        "continuous_scroll" | "scroll.continuous" => Ok(Section::ContinuousScroll),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Display => match key {
            "windows" => config.windows = parse_int(value)?,
            "brightness" => config.brightness = parse_float(value)?,
            _ => {} // Ignore unknown keys
        },
        Section::Scroll => {
            let s = &mut config.scroll;
            match key {
                "enabled" => s.enabled = parse_bool(value)?,
                "delay_ms" | "delay" => s.delay_ms = parse_int(value)?,
                "dwell_ms" | "dwell" => s.dwell_ms = parse_int(value)?,
                "speed_ms" | "speed" => s.speed_ms = parse_int(value)?,
                _ => {}
            }
        }
        Section::ContinuousScroll => {
            let c = &mut config.continuous;
            match key {
                "enabled" => c.enabled = parse_bool(value)?,
                "spacer" => {
                    let spacer = parse_string(value)?;
                    c.spacer = String::<MAX_SPACER_LEN>::try_from(spacer)
                        .map_err(|_| ParseError::ValueTooLong)?;
                }
                "visible_len" | "length" => c.visible_len = parse_int(value)?,
                _ => {}
            }
        }
    }
    Ok(())
}

/// Cut a trailing `# comment` that is not inside a string
fn strip_comment(text: &str) -> &str {
    let mut in_string = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return text[..i].trim(),
            _ => {}
        }
    }
    text.trim()
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(&line[eq_pos + 1..]);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: String<24> = String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a float value; integers are accepted too
fn parse_float(value: &str) -> Result<f32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r##"
# Two modules side by side
[display]
windows = 2
brightness = 0.5

[scroll]
enabled = true
delay_ms = 1_000   # hold at start
dwell_ms = 500
speed_ms = 200

[continuous_scroll]
enabled = true
spacer = "#*#"
visible_len = 8
"##;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(FULL).unwrap();

        assert_eq!(config.windows, 2);
        assert_eq!(config.brightness, 0.5);
        assert!(config.scroll.enabled);
        assert_eq!(config.scroll.delay_ms, 1000);
        assert_eq!(config.scroll.dwell_ms, 500);
        assert_eq!(config.scroll.speed_ms, 200);
        assert!(config.continuous.enabled);
        assert_eq!(config.continuous.spacer.as_str(), "#*#");
        assert_eq!(config.continuous.visible_len, 8);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[display]\nwindows = 3\n").unwrap();
        assert_eq!(config.windows, 3);
        assert_eq!(config.scroll, DisplayConfig::default().scroll);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = parse_config("[scroll]\nacceleration = 3\nspeed = 100\n").unwrap();
        assert_eq!(config.scroll.speed_ms, 100);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_config("[motor]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[display"), Err(ParseError::InvalidSection));
        assert_eq!(
            parse_config("[scroll]\nenabled = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nwindows = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[continuous_scroll]\nspacer = \"this spacer is far too long\""),
            Err(ParseError::ValueTooLong)
        );
        assert_eq!(parse_config("[display]\nwindows"), Err(ParseError::InvalidLine));
    }

    #[test]
    fn test_strip_comment_respects_strings() {
        assert_eq!(strip_comment("\"a#b\" # note"), "\"a#b\"");
        assert_eq!(strip_comment("12 # note"), "12");
    }
}
