//! Display configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::{Brightness, ControlWord0, ControlWord1, PeakCurrent, Prescaler};

/// Default pause between animation frames
pub const DEFAULT_FRAME_DELAY_MS: u32 = 30;

/// Display configuration
///
/// Everything here can change without rebuilding; the display width is a
/// const generic on the display itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Pause after each animation frame (ms)
    pub frame_delay_ms: u32,
    /// Initial PWM brightness
    pub brightness: Brightness,
    /// Peak pixel current
    pub peak_current: PeakCurrent,
    /// Start in sleep mode
    pub sleep: bool,
    /// Put the chain in simultaneous data-out mode during init
    pub simultaneous_data_out: bool,
    /// External oscillator prescaler
    pub prescaler: Prescaler,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            brightness: Brightness::default(),
            peak_current: PeakCurrent::default(),
            sleep: false,
            simultaneous_data_out: true,
            prescaler: Prescaler::Div1,
        }
    }
}

impl DisplayConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Control word 0 matching this configuration
    pub fn control_word0(&self) -> ControlWord0 {
        ControlWord0 {
            brightness: self.brightness,
            peak_current: self.peak_current,
            sleep: self.sleep,
        }
    }

    /// Control word 1 matching this configuration
    pub fn control_word1(&self) -> ControlWord1 {
        ControlWord1 {
            simultaneous: self.simultaneous_data_out,
            prescaler: self.prescaler,
        }
    }
}
