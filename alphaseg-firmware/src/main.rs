//! alphaseg - HT16K33 alphanumeric row demo firmware
//!
//! Drives a row of 4-character 14-segment backpacks on I2C0 of an RP2040
//! (SDA = GPIO4, SCL = GPIO5). The row layout, brightness and scroll
//! timings come from `display.toml`, compiled into the image.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use alphaseg_core::config::{parse_config, DisplayConfig};
use alphaseg_drivers::{EmbeddedHalI2c, Ht16k33};
use alphaseg_hal::{I2cConfig, SharedI2c};

use crate::tasks::display::{Bus, Row};

mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

// The row drivers borrow the bus for the lifetime of the display task
static I2C_BUS: StaticCell<RefCell<Bus>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("alphaseg firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("display.toml rejected ({}), using defaults", e);
            DisplayConfig::default()
        }
    };
    info!(
        "Display config: {} windows, scroll={}, continuous={}",
        config.windows, config.scroll.enabled, config.continuous.enabled
    );

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2cConfig::FAST.frequency;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let bus: &'static RefCell<Bus> = I2C_BUS.init(RefCell::new(EmbeddedHalI2c::new(i2c)));

    let windows = Ht16k33::row(SharedI2c::new(bus), config.windows);
    let row = match Row::new(windows, &config) {
        Ok(row) => row,
        Err(e) => {
            error!("Invalid display configuration: {}", e);
            return;
        }
    };

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::display_task(row)).unwrap();

    info!("All tasks spawned");
}
