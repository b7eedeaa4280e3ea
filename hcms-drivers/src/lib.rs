//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hcms-core on top of `embedded-hal` 1.0:
//!
//! - Serial transports (software bit-banging, hardware SPI)
//! - Reset line handling for power-on

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod reset;
pub mod transport;

pub use reset::ResetLine;
pub use transport::{BitBangTransport, SpiTransport};
