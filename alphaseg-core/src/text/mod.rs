//! Text encoding
//!
//! Turns caller text into packed segment frames:
//!
//! - [`Cells`] walks raw bytes with one byte of lookahead, folding a
//!   trailing `.` into the previous character's decimal point
//! - [`TextBuffer`] owns the fixed-capacity frame bytes and the fill cursor
//! - [`continuous`] rewrites long text so it loops seamlessly when scrolled
//! - [`TextWriter`] is the handle passed to update callbacks

pub mod buffer;
pub mod continuous;
pub mod writer;

pub use buffer::{cell_count, Cells, Encoded, TextBuffer};
pub use writer::TextWriter;
