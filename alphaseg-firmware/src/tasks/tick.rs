//! Tick task for time-based updates
//!
//! Publishes the uptime in milliseconds to the display task, which drives
//! the scroll scheduler from it.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Tick interval in milliseconds
///
/// Bounds the scroll timing resolution; keep it below the configured speed.
pub const TICK_INTERVAL_MS: u32 = 50;

/// Latest uptime in milliseconds (wraps after ~49 days)
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Current uptime in milliseconds, truncated to the scheduler's clock width
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        TICK_SIGNAL.signal(now_ms());
    }
}
