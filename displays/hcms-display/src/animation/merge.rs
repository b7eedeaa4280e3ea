//! Bit merge of an outgoing and an incoming column
//!
//! Column bytes hold pixel rows MSB (top) to LSB (bottom). Rolling by
//! `shift` rows is a window over the two bytes stacked on top of each
//! other, so a shift of `ROW_STEPS` leaves only the new byte.

use hcms_core::glyph::{Glyph, GLYPH_WIDTH, ROW_STEPS};

/// Direction the new glyph enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Old glyph moves toward the bottom, new glyph enters from the top
    #[default]
    Up,
    /// Old glyph moves toward the top, new glyph enters from the bottom
    Down,
}

/// Merge one column of the old and new glyph after `shift` rows
///
/// `shift` of 0 returns `old`, `ROW_STEPS` (or more) returns `new`.
pub fn merge_column(old: u8, new: u8, shift: u8, direction: Direction) -> u8 {
    let shift = u32::from(shift.min(ROW_STEPS));
    match direction {
        // [old | new] slid toward the MSB, keep the upper byte
        Direction::Down => ((((u16::from(old) << 8) | u16::from(new)) << shift) >> 8) as u8,
        // [new | old] slid toward the LSB, keep the lower byte
        Direction::Up => (((u16::from(new) << 8) | u16::from(old)) >> shift) as u8,
    }
}

/// Merge every column of two glyphs
pub fn merge_glyph(old: &Glyph, new: &Glyph, shift: u8, direction: Direction) -> Glyph {
    let mut merged = [0; GLYPH_WIDTH];
    for (out, (&o, &n)) in merged.iter_mut().zip(old.iter().zip(new)) {
        *out = merge_column(o, n, shift, direction);
    }
    merged
}
