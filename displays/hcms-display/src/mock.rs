//! Test doubles for the transport and delay

use embedded_hal::delay::DelayNs;
use hcms_core::traits::{Transport, TransportError, WriteMode};

/// Transport that records every chip-select bracket as one frame
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Data bytes of each completed transaction that carried data
    pub frames: Vec<Vec<u8>>,
    /// Control bytes, in send order
    pub commands: Vec<u8>,
    /// Data bytes sent with chip-select released
    loose: Vec<u8>,
    current: Option<Vec<u8>>,
    /// Fail every byte once this many data bytes have been sent
    pub fail_after: Option<usize>,
    sent: usize,
    /// Register select as it stood when chip-select was asserted
    latched: Option<WriteMode>,
    mode: Option<WriteMode>,
    /// Bytes whose mode differed from the latched register select
    pub misrouted: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(bytes: usize) -> Self {
        Self {
            fail_after: Some(bytes),
            ..Self::default()
        }
    }

    pub fn loose_bytes(&self) -> &[u8] {
        &self.loose
    }

    pub fn is_selected(&self) -> bool {
        self.current.is_some()
    }
}

impl Transport for MockTransport {
    fn select_mode(&mut self, mode: WriteMode) -> Result<(), TransportError> {
        self.mode = Some(mode);
        Ok(())
    }

    fn send_byte(&mut self, value: u8, mode: WriteMode) -> Result<(), TransportError> {
        if self.current.is_some() && self.latched != Some(mode) {
            self.misrouted += 1;
        }
        match mode {
            WriteMode::Command => self.commands.push(value),
            WriteMode::Data => {
                if self.fail_after.is_some_and(|limit| self.sent >= limit) {
                    return Err(TransportError::Bus);
                }
                self.sent += 1;
                match self.current.as_mut() {
                    Some(frame) => frame.push(value),
                    None => self.loose.push(value),
                }
            }
        }
        Ok(())
    }

    fn chip_select(&mut self, active: bool) -> Result<(), TransportError> {
        if active {
            self.latched = self.mode;
            self.current = Some(Vec::new());
        } else if let Some(frame) = self.current.take() {
            self.latched = None;
            if !frame.is_empty() {
                self.frames.push(frame);
            }
        }
        Ok(())
    }
}

/// Delay that only records what was asked of it
#[derive(Debug, Default)]
pub struct MockDelay {
    pub calls: usize,
    pub total_ms: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}
