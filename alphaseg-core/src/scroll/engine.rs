//! Scroll state machine
//!
//! The engine is evaluated once per scheduler pass with the current
//! monotonic time in milliseconds. It only decides *where* the visible
//! window is and *whether* it moved; pushing bytes is the caller's job.
//!
//! ```text
//!   content changed          delay elapsed            end reached
//!  ─────────────────► [hold at 0] ─────────► [advance 2 bytes every speed]
//!                          ▲                               │
//!                          └──────── dwell elapsed ────────┘
//! ```
//!
//! Elapsed time is computed with wrapping arithmetic, so a `u32`
//! millisecond clock rolling over after ~49 days does not stall the scroll.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::text::buffer::CELL_BYTES;

/// Scroll timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    /// Scroll messages wider than the display row
    pub enabled: bool,
    /// Hold time at the start of the message (ms)
    pub delay_ms: u32,
    /// Hold time at the end of the message before wrapping (ms)
    pub dwell_ms: u32,
    /// Time per one-character step (ms)
    pub speed_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: 1500,
            dwell_ms: 1500,
            speed_ms: 250,
        }
    }
}

/// Scroll state
#[derive(Debug, Clone)]
pub struct ScrollEngine {
    config: ScrollConfig,
    /// Byte offset of the visible window into the frame buffer
    offset: usize,
    /// Timestamp of the last offset change (ms)
    last_transition_ms: u32,
}

impl ScrollEngine {
    /// Create an engine at offset zero
    pub const fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            offset: 0,
            last_transition_ms: 0,
        }
    }

    /// Current byte offset of the visible window
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether scrolling is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Timestamp of the last offset change
    pub fn last_transition_ms(&self) -> u32 {
        self.last_transition_ms
    }

    /// Return to the start of the message and restart the delay timer
    pub fn reset(&mut self, now_ms: u32) {
        self.offset = 0;
        self.last_transition_ms = now_ms;
    }

    /// Notify the engine that new text was encoded
    ///
    /// Restarts the pass when scrolling is enabled and the fill length
    /// changed. Returns true if the scroll state was reset.
    pub fn content_changed(&mut self, now_ms: u32, prev_fill: usize, fill: usize) -> bool {
        if !self.config.enabled || prev_fill == fill {
            return false;
        }
        self.reset(now_ms);
        true
    }

    /// Advance the state machine
    ///
    /// `fill` is the number of valid buffer bytes and `visible` the width of
    /// the display row in bytes. Returns true when the visible slice changed
    /// and must be rendered.
    pub fn tick(&mut self, now_ms: u32, fill: usize, visible: usize) -> bool {
        let mut render = false;

        // The buffer may have shrunk past the current position since the last update
        if self.offset + visible > fill {
            self.offset = fill.saturating_sub(visible) & !(CELL_BYTES - 1);
            render = true;
        }

        if !self.config.enabled || fill <= visible {
            return render;
        }

        let elapsed = now_ms.wrapping_sub(self.last_transition_ms);

        if self.offset == 0 && elapsed < self.config.delay_ms {
            return render;
        }

        if self.offset + visible >= fill {
            if elapsed >= self.config.dwell_ms {
                trace!("scroll wrap after {} ms dwell", elapsed);
                self.reset(now_ms);
                render = true;
            }
        } else if elapsed >= self.config.speed_ms {
            self.offset += CELL_BYTES;
            self.last_transition_ms = now_ms;
            render = true;
        }

        render
    }
}
