//! Scrolling
//!
//! Moves the visible window through a message longer than the display row,
//! holding at the start and end of each pass.

pub mod engine;

pub use engine::{ScrollConfig, ScrollEngine};
