//! Embassy async tasks
//!
//! The tick task publishes a millisecond timestamp; the display task owns
//! the row controller and is the only code that touches it.

pub mod display;
pub mod tick;

pub use display::display_task;
pub use tick::tick_task;
