//! Serial transport trait for the display chain

/// Which register a byte is written to
///
/// The HCMS-29xx register-select line routes incoming bytes either to the
/// control registers or to the dot (column data) register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteMode {
    /// Control register write (RS high)
    Command,
    /// Dot register write (RS low)
    Data,
}

/// Errors reported by a transport implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// A control GPIO (clock, data, RS, CE) could not be driven
    Pin,
    /// The serial peripheral reported a failure
    Bus,
}

/// Byte-level link to the display chain
///
/// Implementations decide how a byte is clocked out (software bit-banging
/// or a hardware SPI peripheral). The caller brackets every batch of bytes
/// between `chip_select(true)` and `chip_select(false)`.
///
/// The chips latch register select on the falling edge of chip-enable, so
/// `select_mode` must come before `chip_select(true)`. Every byte of one
/// bracket goes to the same register.
pub trait Transport {
    /// Drive register select for the next chip-select bracket
    fn select_mode(&mut self, mode: WriteMode) -> Result<(), TransportError>;

    /// Send one byte to the register selected by `mode`
    fn send_byte(&mut self, value: u8, mode: WriteMode) -> Result<(), TransportError>;

    /// Assert (`true`) or release (`false`) chip-enable
    ///
    /// Releasing chip-enable latches the shifted-in data into the chips.
    fn chip_select(&mut self, active: bool) -> Result<(), TransportError>;

    /// Send a run of bytes in the same mode
    fn send_bytes(&mut self, values: &[u8], mode: WriteMode) -> Result<(), TransportError> {
        for &value in values {
            self.send_byte(value, mode)?;
        }
        Ok(())
    }
}

/// Helper for chip-select bracketed writes
pub trait TransportExt: Transport {
    /// Select `mode`, then run `f` with chip-enable asserted
    ///
    /// Chip-enable is released even when `f` fails; the first error wins.
    fn transaction<F>(&mut self, mode: WriteMode, f: F) -> Result<(), TransportError>
    where
        F: FnOnce(&mut Self) -> Result<(), TransportError>,
    {
        self.select_mode(mode)?;
        self.chip_select(true)?;
        let result = f(self);
        let released = self.chip_select(false);
        result.and(released)
    }

    /// Write one control word to the chain
    fn write_control(&mut self, word: u8) -> Result<(), TransportError> {
        self.transaction(WriteMode::Command, |t| t.send_byte(word, WriteMode::Command))
    }
}

// Blanket implementation for all Transport types
impl<T: Transport> TransportExt for T {}
