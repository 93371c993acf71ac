//! alphaseg Hardware Abstraction Layer
//!
//! This crate defines the bus abstraction that display window drivers are
//! written against, so the same driver code runs on any chip HAL that can
//! provide an I2C master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (alphaseg-firmware, etc.)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  alphaseg-drivers (HT16K33 windows)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  alphaseg-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`i2c::SharedI2c`] - one bus shared by several window drivers

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key traits at crate root for convenience
pub use i2c::{I2cBus, I2cConfig, SharedI2c};
