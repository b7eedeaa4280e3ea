//! Software (bit-banged) serial transport
//!
//! Clocks each byte MSB first on two GPIOs. Data is set up while the
//! clock is low and sampled by the chips on the rising edge. The clock is
//! parked low before CE is released so the last bit is latched cleanly.
//!
//! Roughly five times slower than the hardware SPI variant, but works on
//! any pins.

use embedded_hal::digital::{OutputPin, PinState};
use hcms_core::traits::{Transport, TransportError, WriteMode};

use super::ControlLines;

/// Bit-banged transport over four GPIOs
pub struct BitBangTransport<CLK, DI, RS, CE> {
    clk: CLK,
    di: DI,
    lines: ControlLines<RS, CE>,
}

impl<CLK, DI, RS, CE> BitBangTransport<CLK, DI, RS, CE>
where
    CLK: OutputPin,
    DI: OutputPin,
    RS: OutputPin,
    CE: OutputPin,
{
    /// Take the pins; the chain starts deselected with the clock low
    pub fn new(mut clk: CLK, di: DI, rs: RS, ce: CE) -> Result<Self, TransportError> {
        let lines = ControlLines::new(rs, ce)?;
        clk.set_low().map_err(|_| TransportError::Pin)?;
        Ok(Self { clk, di, lines })
    }

    /// Give the pins back as `(clk, di, rs, ce)`
    pub fn release(self) -> (CLK, DI, RS, CE) {
        let (rs, ce) = self.lines.release();
        (self.clk, self.di, rs, ce)
    }

    fn clock_low(&mut self) -> Result<(), TransportError> {
        self.clk.set_low().map_err(|_| TransportError::Pin)
    }
}

impl<CLK, DI, RS, CE> Transport for BitBangTransport<CLK, DI, RS, CE>
where
    CLK: OutputPin,
    DI: OutputPin,
    RS: OutputPin,
    CE: OutputPin,
{
    fn select_mode(&mut self, mode: WriteMode) -> Result<(), TransportError> {
        self.lines.select_mode(mode)
    }

    fn send_byte(&mut self, value: u8, mode: WriteMode) -> Result<(), TransportError> {
        self.lines.select_mode(mode)?;

        for bit in (0..8).rev() {
            self.clock_low()?;
            self.di
                .set_state(PinState::from(value & (1 << bit) != 0))
                .map_err(|_| TransportError::Pin)?;
            self.clk.set_high().map_err(|_| TransportError::Pin)?;
        }
        Ok(())
    }

    fn chip_select(&mut self, active: bool) -> Result<(), TransportError> {
        if !active {
            self.clock_low()?;
        }
        self.lines.enable(active)
    }
}
