//! Segment frame buffer
//!
//! Every character cell occupies two bytes in display RAM order: the low
//! byte holds segments 0..=7, the high byte segments 8..=13 plus the
//! decimal point in bit 14.

use core::iter::{Copied, Peekable};
use core::slice::Iter;

use crate::glyph::{self, DECIMAL_POINT};

/// Bytes per character cell
pub const CELL_BYTES: usize = 2;

/// Cursor over raw text yielding one segment pattern per display cell
///
/// A `.` directly after a character is consumed together with it and sets
/// the decimal point bit instead of taking a cell of its own. A `.` with
/// nothing to attach to (leading, or after another consumed `.`) renders as
/// its own glyph.
#[derive(Clone)]
pub struct Cells<'a> {
    bytes: Peekable<Copied<Iter<'a, u8>>>,
}

impl<'a> Cells<'a> {
    /// Start a cursor at the beginning of `text`
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            bytes: text.iter().copied().peekable(),
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let byte = self.bytes.next()?;
        let mut pattern = glyph::encode(byte);
        if self.bytes.next_if_eq(&b'.').is_some() {
            pattern |= DECIMAL_POINT;
        }
        Some(pattern)
    }
}

/// Number of display cells `text` occupies once decimal points are folded
pub fn cell_count(text: &[u8]) -> usize {
    Cells::new(text).count()
}

/// Result of encoding one text request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Encoded {
    /// Valid bytes in the buffer after encoding
    pub fill: usize,
    /// Input remained when the buffer ran full and was dropped
    pub truncated: bool,
}

/// Fixed-capacity segment frame buffer
///
/// `N` is the capacity in bytes. The controller requires it to be even and
/// at least as wide as the display row, but the buffer itself only relies
/// on never writing a partial cell.
#[derive(Clone)]
pub struct TextBuffer<const N: usize> {
    bytes: [u8; N],
    fill: usize,
}

impl<const N: usize> Default for TextBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TextBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            fill: 0,
        }
    }

    /// Zero every byte and reset the fill cursor
    pub fn clear(&mut self) {
        self.bytes.fill(0);
        self.fill = 0;
    }

    /// Encode `text` into the buffer, replacing previous content
    ///
    /// The whole buffer is cleared first so no stale cells survive a
    /// shorter request. Text that does not fit is dropped at the last
    /// complete cell.
    pub fn encode(&mut self, text: &[u8]) -> Encoded {
        self.clear();

        let mut pos = 0;
        let mut truncated = false;

        for pattern in Cells::new(text) {
            if pos + CELL_BYTES > N {
                warn!("output buffer full, dropping text past {} bytes", N);
                truncated = true;
                break;
            }
            let [low, high] = pattern.to_le_bytes();
            self.bytes[pos] = low;
            self.bytes[pos + 1] = high;
            pos += CELL_BYTES;
        }

        self.fill = pos;
        Encoded {
            fill: pos,
            truncated,
        }
    }

    /// Number of valid bytes
    pub fn fill(&self) -> usize {
        self.fill
    }

    /// Capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The whole buffer, including the zeroed tail past `fill`
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The encoded bytes only
    pub fn filled(&self) -> &[u8] {
        &self.bytes[..self.fill]
    }

    /// Up to `len` bytes starting at `offset`, clamped to the capacity
    pub fn window(&self, offset: usize, len: usize) -> &[u8] {
        let start = offset.min(N);
        let end = start.saturating_add(len).min(N);
        &self.bytes[start..end]
    }

    /// Segment pattern of cell `index`, if it lies within the fill
    pub fn cell(&self, index: usize) -> Option<u16> {
        let pos = index.checked_mul(CELL_BYTES)?;
        if pos + CELL_BYTES > self.fill {
            return None;
        }
        Some(u16::from_le_bytes([self.bytes[pos], self.bytes[pos + 1]]))
    }
}
