//! Display task
//!
//! Owns the row controller. Every tick advances the scroll scheduler; on a
//! slower cadence the task rotates through a few status pages so a freshly
//! flashed board shows short, long and formatted content.

use alphaseg_core::AlphaDisplay;
use alphaseg_drivers::{EmbeddedHalI2c, Ht16k33};
use alphaseg_hal::SharedI2c;
use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;

use super::tick::TICK_SIGNAL;

/// Frame buffer capacity in bytes (32 characters)
pub const BUFFER_BYTES: usize = 64;

/// How long each status page stays up
pub const PAGE_INTERVAL_MS: u32 = 12_000;

/// Blocking I2C bus shared by every backpack in the row
pub type Bus = EmbeddedHalI2c<I2c<'static, I2C0, Blocking>>;

/// The row controller as wired on this board
pub type Row = AlphaDisplay<Ht16k33<SharedI2c<'static, Bus>>, BUFFER_BYTES>;

#[derive(Clone, Copy)]
enum Page {
    Banner,
    Uptime,
    Brightness,
}

impl Page {
    fn next(self) -> Self {
        match self {
            Page::Banner => Page::Uptime,
            Page::Uptime => Page::Brightness,
            Page::Brightness => Page::Banner,
        }
    }
}

fn show(row: &mut Row, page: Page, now_ms: u32) {
    let result = match page {
        Page::Banner => row.print(now_ms, "ALPHASEG 14-SEGMENT ROW").map(|encoded| {
            if encoded.truncated {
                warn!("banner truncated to {} bytes", encoded.fill);
            }
        }),
        Page::Uptime => row
            .printf(now_ms, format_args!("UP {}S", now_ms / 1000))
            .map(|_| ()),
        Page::Brightness => {
            let level = row.brightness_level().level();
            row.request_update(now_ms, |writer| {
                writer.printf(format_args!("BRT {}/16", level));
            })
        }
    };

    if let Err(e) = result {
        warn!("Display update failed: {}", e);
    }
}

/// Display task - drives the row from the tick signal
#[embassy_executor::task]
pub async fn display_task(mut row: Row) {
    info!("Display task started ({} windows)", row.windows().len());

    if let Err(e) = row.setup() {
        error!("Display setup failed: {}", e);
    }

    let mut page = Page::Banner;
    let mut next_page_ms = 0u32;

    loop {
        let now_ms = TICK_SIGNAL.wait().await;

        // Signed difference keeps the comparison valid across u32 wraparound
        if now_ms.wrapping_sub(next_page_ms) as i32 >= 0 {
            show(&mut row, page, now_ms);
            page = page.next();
            next_page_ms = now_ms.wrapping_add(PAGE_INTERVAL_MS);
        }

        if let Err(e) = row.tick(now_ms) {
            warn!("Display tick failed: {}", e);
        }
    }
}
