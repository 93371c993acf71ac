//! Configuration types
//!
//! Board-agnostic display configuration plus a parser for the small TOML
//! subset the firmware embeds.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
