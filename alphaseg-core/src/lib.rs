//! Board-agnostic core logic for HT16K33 alphanumeric display rows
//!
//! This crate contains everything that does not depend on a specific bus
//! or chip:
//!
//! - 14-segment glyph lookup
//! - Text-to-segment encoding into a fixed-capacity frame buffer
//! - Continuous (looping) scroll text rewriting
//! - The scroll/dwell state machine
//! - Rendering the visible slice to an ordered row of display windows
//! - Brightness mapping
//! - Configuration types and a minimal TOML parser
//!
//! The entry point is [`AlphaDisplay`], which owns the windows, the buffer
//! and the scroll state, and is driven by `tick()` from a periodic task.

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod brightness;
pub mod config;
pub mod display;
pub mod glyph;
pub mod render;
pub mod scroll;
pub mod text;
pub mod traits;

pub use brightness::Brightness;
pub use config::{ConfigError, DisplayConfig};
pub use display::AlphaDisplay;
pub use traits::DisplayWindow;
