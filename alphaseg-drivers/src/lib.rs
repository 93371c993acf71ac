//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in alphaseg-core:
//!
//! - HT16K33 14-segment backpack windows over any [`alphaseg_hal::I2cBus`]
//! - An adapter exposing `embedded-hal` 1.0 I2C masters as `I2cBus`

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;

pub use bus::EmbeddedHalI2c;
pub use display::{Ht16k33, Ht16k33Error};
