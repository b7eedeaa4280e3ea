//! Serial transports
//!
//! Both variants share the two control lines of the chain:
//! - RS (register select): high for control words, low for dot data
//! - CE (chip enable): active low; the rising edge latches the data
//!
//! They differ only in how the eight bits of a byte are clocked out.

pub mod bitbang;
pub mod spi;

pub use bitbang::BitBangTransport;
pub use spi::SpiTransport;

use embedded_hal::digital::{OutputPin, PinState};
use hcms_core::traits::{TransportError, WriteMode};

/// RS and CE lines with the last driven register select
struct ControlLines<RS, CE> {
    rs: RS,
    ce: CE,
    mode: Option<WriteMode>,
}

impl<RS: OutputPin, CE: OutputPin> ControlLines<RS, CE> {
    /// Take the lines and leave the chain deselected
    fn new(rs: RS, mut ce: CE) -> Result<Self, TransportError> {
        ce.set_high().map_err(|_| TransportError::Pin)?;
        Ok(Self { rs, ce, mode: None })
    }

    /// Drive RS, only when the mode changes
    fn select_mode(&mut self, mode: WriteMode) -> Result<(), TransportError> {
        if self.mode == Some(mode) {
            return Ok(());
        }
        let level = match mode {
            WriteMode::Command => PinState::High,
            WriteMode::Data => PinState::Low,
        };
        self.rs.set_state(level).map_err(|_| TransportError::Pin)?;
        self.mode = Some(mode);
        Ok(())
    }

    fn enable(&mut self, active: bool) -> Result<(), TransportError> {
        // CE is active low
        self.ce
            .set_state(PinState::from(!active))
            .map_err(|_| TransportError::Pin)
    }

    fn release(self) -> (RS, CE) {
        (self.rs, self.ce)
    }
}
