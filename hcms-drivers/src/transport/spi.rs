//! Hardware SPI transport
//!
//! The SPI peripheral shifts bytes out MSB first in mode 0 (clock idles
//! low, data sampled on the rising edge), which is exactly what the
//! chips expect. MISO is unused.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};
use hcms_core::traits::{Transport, TransportError, WriteMode};

use super::ControlLines;

/// SPI mode the bus must be configured with
pub const SPI_MODE: Mode = MODE_0;

/// Highest clock rate the chips accept
pub const MAX_FREQUENCY_HZ: u32 = 5_000_000;

/// Transport over a hardware SPI bus plus RS and CE GPIOs
pub struct SpiTransport<SPI, RS, CE> {
    spi: SPI,
    lines: ControlLines<RS, CE>,
}

impl<SPI, RS, CE> SpiTransport<SPI, RS, CE>
where
    SPI: SpiBus,
    RS: OutputPin,
    CE: OutputPin,
{
    /// Take the bus and pins; the chain starts deselected
    ///
    /// The bus must already be set up with [`SPI_MODE`] and at most
    /// [`MAX_FREQUENCY_HZ`].
    pub fn new(spi: SPI, rs: RS, ce: CE) -> Result<Self, TransportError> {
        let lines = ControlLines::new(rs, ce)?;
        Ok(Self { spi, lines })
    }

    /// Give the bus and pins back as `(spi, rs, ce)`
    pub fn release(self) -> (SPI, RS, CE) {
        let (rs, ce) = self.lines.release();
        (self.spi, rs, ce)
    }
}

impl<SPI, RS, CE> Transport for SpiTransport<SPI, RS, CE>
where
    SPI: SpiBus,
    RS: OutputPin,
    CE: OutputPin,
{
    fn select_mode(&mut self, mode: WriteMode) -> Result<(), TransportError> {
        self.lines.select_mode(mode)
    }

    fn send_byte(&mut self, value: u8, mode: WriteMode) -> Result<(), TransportError> {
        self.lines.select_mode(mode)?;
        self.spi.write(&[value]).map_err(|_| TransportError::Bus)
    }

    fn send_bytes(&mut self, values: &[u8], mode: WriteMode) -> Result<(), TransportError> {
        self.lines.select_mode(mode)?;
        self.spi.write(values).map_err(|_| TransportError::Bus)
    }

    fn chip_select(&mut self, active: bool) -> Result<(), TransportError> {
        if !active {
            // Every bit must be out before CE latches the data
            self.spi.flush().map_err(|_| TransportError::Bus)?;
        }
        self.lines.enable(active)
    }
}
