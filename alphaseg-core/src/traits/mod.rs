//! Hardware abstraction traits
//!
//! These traits define the interface between the display logic and the
//! chip drivers that move bytes to each physical module.

pub mod window;

pub use window::{command, DisplayWindow, WINDOW_BYTES};
