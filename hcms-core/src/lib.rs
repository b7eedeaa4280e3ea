//! Board-agnostic core logic for HCMS-29xx dot-matrix displays
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller or on the way bytes reach the display:
//!
//! - Transport trait (one byte in command or data mode, chip-select)
//! - 5x7 glyph table and character resolution
//! - Control word encoding (brightness, peak current, sleep)
//! - Display configuration and its parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod glyph;
pub mod traits;
