//! Display window implementations

pub mod ht16k33;
// pub mod vk16k33;  // Pin-compatible clone, same command set

pub use ht16k33::{Ht16k33, Ht16k33Error, BASE_ADDRESS};
