//! Text writer handed to update callbacks

use core::fmt::{self, Write};

use heapless::Vec;

use super::buffer::{Encoded, TextBuffer};
use super::continuous;
use crate::config::ContinuousScrollConfig;

/// Write access to the frame buffer during one update
///
/// Each `print` replaces the buffer content; the last call inside an update
/// callback is what gets displayed.
pub struct TextWriter<'a, const N: usize> {
    buffer: &'a mut TextBuffer<N>,
    continuous: &'a ContinuousScrollConfig,
}

impl<'a, const N: usize> TextWriter<'a, N> {
    /// Create a writer over `buffer`
    pub fn new(buffer: &'a mut TextBuffer<N>, continuous: &'a ContinuousScrollConfig) -> Self {
        Self { buffer, continuous }
    }

    /// Encode `text`, applying continuous scroll rewriting when enabled
    pub fn print(&mut self, text: &str) -> Encoded {
        self.print_bytes(text.as_bytes())
    }

    /// Encode raw bytes; bytes above 0x7F render blank
    pub fn print_bytes(&mut self, text: &[u8]) -> Encoded {
        if self.continuous.enabled {
            let rewritten = continuous::rewrite::<N>(
                text,
                self.continuous.spacer.as_bytes(),
                self.continuous.visible_len as usize,
            );
            if let Some(rewritten) = rewritten {
                let mut encoded = self.buffer.encode(&rewritten.text);
                if rewritten.truncated && !encoded.truncated {
                    warn!("output buffer full, continuous scroll text cut at {} bytes", N);
                }
                encoded.truncated |= rewritten.truncated;
                return encoded;
            }
        }
        self.buffer.encode(text)
    }

    /// Format into a scratch buffer of the frame capacity, then print it
    ///
    /// The scratch holds `N` bytes of text. There is no terminator, so this
    /// is one byte more than `snprintf` into an `N`-byte buffer would keep.
    /// Output longer than the scratch buffer is cut off. Returns `None`
    /// without touching the buffer if formatting failed or produced nothing.
    pub fn printf(&mut self, args: fmt::Arguments<'_>) -> Option<Encoded> {
        let scratch = format_bounded::<N>(args)?;
        Some(self.print_bytes(&scratch))
    }

    /// Bytes encoded so far
    pub fn fill(&self) -> usize {
        self.buffer.fill()
    }
}

/// Format `args` into at most `S` bytes
///
/// Mirrors `snprintf`: overlong output is truncated, and `None` stands for
/// both a formatter error and an empty result.
pub fn format_bounded<const S: usize>(args: fmt::Arguments<'_>) -> Option<Vec<u8, S>> {
    let mut out = Truncating {
        bytes: Vec::new(),
        truncated: false,
    };
    if out.write_fmt(args).is_err() {
        warn!("formatter error, print suppressed");
        return None;
    }
    if out.truncated {
        debug!("formatted text cut to {} bytes", S);
    }
    if out.bytes.is_empty() {
        return None;
    }
    Some(out.bytes)
}

struct Truncating<const S: usize> {
    bytes: Vec<u8, S>,
    truncated: bool,
}

impl<const S: usize> Write for Truncating<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = S - self.bytes.len();
        let take = s.len().min(room);
        if take < s.len() {
            self.truncated = true;
        }
        let _ = self.bytes.extend_from_slice(&s.as_bytes()[..take]);
        // Keep going so the formatter never reports truncation as an error
        Ok(())
    }
}
