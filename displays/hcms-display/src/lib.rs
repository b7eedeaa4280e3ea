//! Text rendering and transition animations for HCMS-29xx displays
//!
//! This crate provides:
//! - `ScreenBuffer` holding what the chain currently shows
//! - Render functions turning cells into column bytes
//! - Roll-over transitions (uniform and staggered) between two strings
//! - `Display`, tying a transport, glyph table and delay together
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Display (set_text / transition / ...)   │
//! └──────────────────────────────────────────┘
//!          │                   │
//!          ▼                   ▼
//! ┌─────────────────┐  ┌─────────────────────┐
//! │  ScreenBuffer   │  │ Rollover /          │
//! │                 │  │ SmoothRollover      │
//! └─────────────────┘  └─────────────────────┘
//!          │                   │
//!          └─────────┬─────────┘
//!                    ▼
//! ┌──────────────────────────────────────────┐
//! │  render: glyph columns -> Transport      │
//! └──────────────────────────────────────────┘
//! ```
//!
//! All operations are blocking. A transition holds `&mut Display` until
//! its last frame has been sent, so only one can be in flight.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod display;
pub mod render;
pub mod screen;

#[cfg(test)]
mod mock;

// Re-export key types
pub use animation::{Direction, Rollover, SmoothRollover, Transition, TransitionStyle};
pub use display::Display;
pub use screen::ScreenBuffer;
