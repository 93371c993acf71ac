//! Continuous scroll rewriting
//!
//! A scrolling message normally jumps from its last screenful back to the
//! start. To make it loop, the text is rewritten once before encoding as
//!
//! ```text
//! original + " " + spacer + " " + preview
//! ```
//!
//! where `preview` is the first `visible_len` bytes of the rewritten string.
//! When the scroll reaches the end, the display shows the start of the
//! message again, so the wrap is invisible.

use heapless::Vec;

/// Number of cells the text occupies, ignoring every literal `.`
///
/// This is the length used to decide whether the message is long enough to
/// need rewriting at all.
pub fn effective_len(text: &[u8]) -> usize {
    text.iter().filter(|&&b| b != b'.').count()
}

/// Text rewritten for looping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten<const S: usize> {
    /// `text + " " + spacer + " " + preview`, cut to `S` bytes
    pub text: Vec<u8, S>,
    /// Bytes were dropped because the result did not fit in `S`
    pub truncated: bool,
}

/// Rewrite `text` for seamless looping
///
/// Returns `None` when the text fits within `visible_len` cells and should
/// be encoded unchanged. The preview is the first `visible_len` bytes of the
/// candidate, clamped to its length. Output beyond `S` bytes is dropped and
/// reported through [`Rewritten::truncated`].
pub fn rewrite<const S: usize>(text: &[u8], spacer: &[u8], visible_len: usize) -> Option<Rewritten<S>> {
    if effective_len(text) <= visible_len {
        return None;
    }

    // Phase 1: the full candidate without the preview
    let mut out: Vec<u8, S> = Vec::new();
    let mut truncated = false;
    let parts: [&[u8]; 4] = [text, b" ", spacer, b" "];
    for part in parts {
        truncated |= push_truncating(&mut out, part);
    }

    // Phase 2: a bounded prefix of the candidate, copied byte by byte
    let preview = visible_len.min(out.len());
    for i in 0..preview {
        let byte = out[i];
        if out.push(byte).is_err() {
            truncated = true;
            break;
        }
    }

    if truncated {
        debug!("continuous scroll text cut at {} bytes", S);
    }
    Some(Rewritten { text: out, truncated })
}

/// Append as much of `bytes` as fits; returns true if anything was dropped
fn push_truncating<const S: usize>(out: &mut Vec<u8, S>, bytes: &[u8]) -> bool {
    let room = S - out.len();
    let take = bytes.len().min(room);
    // Cannot fail: `take` never exceeds the remaining capacity
    let _ = out.extend_from_slice(&bytes[..take]);
    take < bytes.len()
}
