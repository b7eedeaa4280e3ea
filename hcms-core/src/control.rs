//! Control word encoding
//!
//! Each HCMS-29xx chip has two control registers, written with RS high.
//! Bit 7 of the written byte selects the register.
//!
//! # Control word 0
//!
//! | Bits | Field                                   |
//! |------|-----------------------------------------|
//! | 7    | 0 (selects word 0)                      |
//! | 6    | 1 = normal operation, 0 = sleep         |
//! | 5..4 | peak pixel current                      |
//! | 3..0 | PWM brightness level                    |
//!
//! # Control word 1
//!
//! | Bits | Field                                   |
//! |------|-----------------------------------------|
//! | 7    | 1 (selects word 1)                      |
//! | 1    | external oscillator prescaler (1 = /8)  |
//! | 0    | 1 = simultaneous data out, 0 = serial   |

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Characters driven by one chip
pub const CHARS_PER_CHIP: usize = 4;

/// Longest supported chain
pub const MAX_CHIPS: usize = 16;

/// Control words written by [`init_sequence`] for the longest chain
pub const MAX_INIT_WORDS: usize = MAX_CHIPS + 1;

/// Bits of control word 0 holding the brightness level
const BRIGHTNESS_MASK: u8 = 0x0F;

/// Number of chips needed for `chars` characters
pub const fn chip_count(chars: usize) -> usize {
    chars.div_ceil(CHARS_PER_CHIP)
}

/// PWM brightness level (0 = blank, 15 = full)
///
/// Always within `0..=15`; deserializing rejects anything larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8")
)]
pub struct Brightness(u8);

/// Brightness level above [`Brightness::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidBrightness(pub u8);

impl core::fmt::Display for InvalidBrightness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "brightness {} out of range 0..=15", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = InvalidBrightness;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if level > Self::MAX.0 {
            Err(InvalidBrightness(level))
        } else {
            Ok(Self(level))
        }
    }
}

impl Brightness {
    /// Display blanked
    pub const MIN: Self = Self(0);
    /// Full PWM duty
    pub const MAX: Self = Self(15);

    /// Create a brightness level, clamping to `0..=15`
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX.0 {
            Self::MAX
        } else {
            Self(level)
        }
    }

    /// Raw level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Next brighter level, saturating at [`Brightness::MAX`]
    pub const fn brighter(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Next dimmer level, saturating at [`Brightness::MIN`]
    pub const fn dimmer(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(10)
    }
}

/// Peak pixel current, relative to the chip maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PeakCurrent {
    /// 50 %
    Half,
    /// 73 % (power-on value)
    #[default]
    Reduced,
    /// 93 %
    High,
    /// 100 %
    Full,
}

impl PeakCurrent {
    /// Value of bits 5..4 in control word 0
    pub const fn bits(self) -> u8 {
        match self {
            PeakCurrent::Reduced => 0b00,
            PeakCurrent::Half => 0b01,
            PeakCurrent::Full => 0b10,
            PeakCurrent::High => 0b11,
        }
    }

    /// Parse a percentage label such as `"73%"` or `"73"`
    pub fn from_percent(label: &str) -> Option<Self> {
        match label.trim().trim_end_matches('%') {
            "50" => Some(PeakCurrent::Half),
            "73" => Some(PeakCurrent::Reduced),
            "93" => Some(PeakCurrent::High),
            "100" => Some(PeakCurrent::Full),
            _ => None,
        }
    }
}

/// External oscillator prescaler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prescaler {
    /// Oscillator used directly
    #[default]
    Div1,
    /// Oscillator divided by 8
    Div8,
}

/// Control word 0: brightness, peak current and sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord0 {
    /// PWM brightness
    pub brightness: Brightness,
    /// Peak pixel current
    pub peak_current: PeakCurrent,
    /// Sleep mode: oscillator stopped, display blank, dot data kept
    pub sleep: bool,
}

impl ControlWord0 {
    /// Encode as the byte sent with RS high
    pub const fn to_byte(self) -> u8 {
        let normal = if self.sleep { 0 } else { 1 << 6 };
        normal
            | (self.peak_current.bits() << 4)
            | (self.brightness.level() & BRIGHTNESS_MASK)
    }
}

/// Control word 1: data-out mode and prescaler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord1 {
    /// Simultaneous data out: one control write reaches every chip
    pub simultaneous: bool,
    /// External oscillator prescaler
    pub prescaler: Prescaler,
}

impl Default for ControlWord1 {
    fn default() -> Self {
        Self {
            simultaneous: true,
            prescaler: Prescaler::Div1,
        }
    }
}

impl ControlWord1 {
    /// Encode as the byte sent with RS high
    pub const fn to_byte(self) -> u8 {
        let prescaler = match self.prescaler {
            Prescaler::Div1 => 0,
            Prescaler::Div8 => 1 << 1,
        };
        0x80 | prescaler | (self.simultaneous as u8)
    }
}

/// Control writes needed after reset for a chain of `chips` chips
///
/// After reset every chip is in serial data-out mode, so word 1 has to be
/// shifted through the whole chain once per chip (plus one) before each
/// chip has latched it. `chips` is clamped to [`MAX_CHIPS`].
pub fn init_sequence(word1: ControlWord1, chips: usize) -> Vec<u8, MAX_INIT_WORDS> {
    let mut words = Vec::new();
    for _ in 0..chips.min(MAX_CHIPS) + 1 {
        let _ = words.push(word1.to_byte());
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_count() {
        assert_eq!(chip_count(4), 1);
        assert_eq!(chip_count(8), 2);
        assert_eq!(chip_count(9), 3);
        assert_eq!(chip_count(0), 0);
    }

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(Brightness::new(20), Brightness::MAX);
        assert_eq!(Brightness::MAX.brighter(), Brightness::MAX);
        assert_eq!(Brightness::MIN.dimmer(), Brightness::MIN);
        assert_eq!(Brightness::new(7).brighter().level(), 8);
    }

    #[test]
    fn test_brightness_try_from() {
        assert_eq!(Brightness::try_from(15), Ok(Brightness::MAX));
        assert_eq!(Brightness::try_from(0), Ok(Brightness::MIN));
        assert_eq!(Brightness::try_from(16), Err(InvalidBrightness(16)));
        assert_eq!(Brightness::try_from(200), Err(InvalidBrightness(200)));
    }

    #[test]
    fn test_word0_never_touches_other_fields() {
        let word = ControlWord0 {
            brightness: Brightness(200),
            peak_current: PeakCurrent::Reduced,
            sleep: false,
        };
        // Bit 7 stays clear and the peak current bits stay 00
        assert_eq!(word.to_byte(), 0x40 | (200 & 0x0F));
        assert_eq!(Brightness(u8::MAX).brighter(), Brightness::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_brightness_deserialize_rejects_out_of_range() {
        use serde::de::value::{Error, U8Deserializer};
        use serde::de::IntoDeserializer;

        let level: U8Deserializer<Error> = 9u8.into_deserializer();
        assert_eq!(Brightness::deserialize(level).unwrap().level(), 9);

        let level: U8Deserializer<Error> = 200u8.into_deserializer();
        assert!(Brightness::deserialize(level).is_err());
    }

    #[test]
    fn test_word0_encoding() {
        let word = ControlWord0 {
            brightness: Brightness::MAX,
            peak_current: PeakCurrent::Full,
            sleep: false,
        };
        assert_eq!(word.to_byte(), 0b0110_1111);

        let asleep = ControlWord0 {
            sleep: true,
            ..word
        };
        assert_eq!(asleep.to_byte(), 0b0010_1111);

        // Register select bit is always clear
        assert_eq!(ControlWord0::default().to_byte() & 0x80, 0);
    }

    #[test]
    fn test_word1_encoding() {
        assert_eq!(ControlWord1::default().to_byte(), 0x81);
        let word = ControlWord1 {
            simultaneous: false,
            prescaler: Prescaler::Div8,
        };
        assert_eq!(word.to_byte(), 0x82);
    }

    #[test]
    fn test_peak_current_labels() {
        assert_eq!(PeakCurrent::from_percent("73%"), Some(PeakCurrent::Reduced));
        assert_eq!(PeakCurrent::from_percent(" 100 "), Some(PeakCurrent::Full));
        assert_eq!(PeakCurrent::from_percent("42%"), None);
    }

    #[test]
    fn test_init_sequence() {
        let words = init_sequence(ControlWord1::default(), 2);
        assert_eq!(words.as_slice(), &[0x81, 0x81, 0x81]);

        let words = init_sequence(ControlWord1::default(), 100);
        assert_eq!(words.len(), MAX_INIT_WORDS);
    }
}
