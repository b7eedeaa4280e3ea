//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering logic
//! and the serial link to the display chips.

pub mod transport;

pub use transport::{Transport, TransportError, TransportExt, WriteMode};
