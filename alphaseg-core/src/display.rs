//! Display row controller
//!
//! Owns the windows, the frame buffer and the scroll state of one display
//! row. Everything runs on a single cooperative context: `tick()` from a
//! periodic task, `print()`/`request_update()` from application logic, so
//! an update always completes before the next tick observes the buffer.
//!
//! # Usage
//!
//! ```ignore
//! let mut display: AlphaDisplay<_, 64> = AlphaDisplay::new(windows, &config)?;
//! display.setup()?;
//! display.print(now_ms, "HELLO WORLD")?;
//!
//! // In the periodic task:
//! display.tick(now_ms)?;
//! ```

use core::fmt;

use heapless::Vec;

use crate::brightness::Brightness;
use crate::config::{ConfigError, ContinuousScrollConfig, DisplayConfig, MAX_WINDOWS};
use crate::render;
use crate::scroll::ScrollEngine;
use crate::text::writer::format_bounded;
use crate::text::{Encoded, TextBuffer, TextWriter};
use crate::traits::{command, DisplayWindow, WINDOW_BYTES};

/// Controller for a row of alphanumeric windows
///
/// `N` is the frame buffer capacity in bytes (two per character). It must
/// be even and at least `windows × 8`; anything longer than the row is
/// reachable only by scrolling.
pub struct AlphaDisplay<W, const N: usize> {
    windows: Vec<W, MAX_WINDOWS>,
    buffer: TextBuffer<N>,
    scroll: ScrollEngine,
    continuous: ContinuousScrollConfig,
    brightness: Brightness,
    initial_brightness: f32,
}

impl<W: DisplayWindow, const N: usize> AlphaDisplay<W, N> {
    /// Create a controller for `windows`, ordered left to right
    pub fn new<I>(windows: I, config: &DisplayConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = W>,
    {
        config.validate_capacity(N)?;

        let mut list = Vec::new();
        for window in windows {
            list.push(window).map_err(|_| ConfigError::TooManyWindows)?;
        }
        if list.is_empty() {
            return Err(ConfigError::NoWindows);
        }
        if list.len() != config.windows as usize {
            return Err(ConfigError::WindowCountMismatch);
        }

        Ok(Self {
            windows: list,
            buffer: TextBuffer::new(),
            scroll: ScrollEngine::new(config.scroll),
            continuous: config.continuous.clone(),
            brightness: Brightness::from_fraction(config.brightness),
            initial_brightness: config.brightness,
        })
    }

    /// Bring every window up and apply the configured brightness
    ///
    /// The buffer is cleared; the first `tick()` renders the blank row.
    pub fn setup(&mut self) -> Result<(), W::Error> {
        render::broadcast(&mut self.windows, &[command::SYSTEM_SETUP, command::DISPLAY_ON])?;
        self.set_brightness(self.initial_brightness)?;
        self.buffer.clear();
        debug!("display row up: {} windows, {} byte buffer", self.windows.len(), N);
        Ok(())
    }

    /// Periodic scheduler pass
    ///
    /// Returns true if the row was re-rendered.
    pub fn tick(&mut self, now_ms: u32) -> Result<bool, W::Error> {
        let visible = self.visible_width();
        if self.scroll.tick(now_ms, self.buffer.fill(), visible) {
            self.render()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Re-encode the content through `writer` and render it
    ///
    /// The buffer is cleared before `writer` runs. If the fill length
    /// changed and scrolling is enabled, the scroll pass restarts from the
    /// beginning.
    pub fn request_update<F>(&mut self, now_ms: u32, writer: F) -> Result<(), W::Error>
    where
        F: FnOnce(&mut TextWriter<'_, N>),
    {
        let prev_fill = self.buffer.fill();
        self.buffer.clear();

        {
            let mut text = TextWriter::new(&mut self.buffer, &self.continuous);
            writer(&mut text);
        }

        let fill = self.buffer.fill();
        if self.scroll.content_changed(now_ms, prev_fill, fill) {
            trace!("content length {} -> {}, scroll restarted", prev_fill, fill);
        }
        self.render()
    }

    /// Display `text`
    pub fn print(&mut self, now_ms: u32, text: &str) -> Result<Encoded, W::Error> {
        let mut encoded = Encoded {
            fill: 0,
            truncated: false,
        };
        self.request_update(now_ms, |w| encoded = w.print(text))?;
        Ok(encoded)
    }

    /// Display formatted text, e.g. `printf(now, format_args!("{:.1}C", t))`
    ///
    /// The output is cut to `N` bytes; with no terminator to store, that is
    /// one byte more than `snprintf` into an `N`-byte buffer keeps. Returns
    /// `Ok(None)` and leaves the display untouched when formatting failed or
    /// was empty.
    pub fn printf(&mut self, now_ms: u32, args: fmt::Arguments<'_>) -> Result<Option<Encoded>, W::Error> {
        let Some(scratch) = format_bounded::<N>(args) else {
            return Ok(None);
        };
        let mut encoded = Encoded {
            fill: 0,
            truncated: false,
        };
        self.request_update(now_ms, |w| encoded = w.print_bytes(&scratch))?;
        Ok(Some(encoded))
    }

    /// Set brightness from a fraction in `[0, 1]`
    ///
    /// Out-of-range values are clamped. Zero turns every window off.
    pub fn set_brightness(&mut self, level: f32) -> Result<(), W::Error> {
        self.brightness = Brightness::from_fraction(level);
        render::broadcast(&mut self.windows, &self.brightness.commands())
    }

    /// Current brightness as a fraction
    pub fn brightness(&self) -> f32 {
        self.brightness.as_fraction()
    }

    /// Current brightness level
    pub fn brightness_level(&self) -> Brightness {
        self.brightness
    }

    /// Push the visible slice to the windows
    pub fn render(&mut self) -> Result<(), W::Error> {
        let visible = self.buffer.window(self.scroll.offset(), self.visible_width());
        render::render_frame(&mut self.windows, visible)
    }

    /// Width of the row in buffer bytes
    pub fn visible_width(&self) -> usize {
        self.windows.len() * WINDOW_BYTES
    }

    /// Current scroll offset in buffer bytes
    pub fn offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Valid bytes in the buffer
    pub fn fill(&self) -> usize {
        self.buffer.fill()
    }

    /// The frame buffer
    pub fn buffer(&self) -> &TextBuffer<N> {
        &self.buffer
    }

    /// The windows, left to right
    pub fn windows(&self) -> &[W] {
        &self.windows
    }

    /// Scroll state
    pub fn scroll(&self) -> &ScrollEngine {
        &self.scroll
    }
}
