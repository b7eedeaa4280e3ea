//! Reset line
//!
//! The active-low reset input clears the control registers of every chip
//! in the chain. Dot data is undefined afterwards, so a reset is always
//! followed by a full init (blank frame and control words).

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use hcms_core::traits::TransportError;

/// Minimum reset pulse width
pub const RESET_PULSE_US: u32 = 1;

/// Active-low reset pin of the chain
pub struct ResetLine<P> {
    pin: P,
}

impl<P: OutputPin> ResetLine<P> {
    /// Take the pin and leave the chain out of reset
    pub fn new(mut pin: P) -> Result<Self, TransportError> {
        pin.set_high().map_err(|_| TransportError::Pin)?;
        Ok(Self { pin })
    }

    /// Pulse reset low, once at power-on
    pub fn pulse<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), TransportError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("display reset");

        self.pin.set_low().map_err(|_| TransportError::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.pin.set_high().map_err(|_| TransportError::Pin)
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}
