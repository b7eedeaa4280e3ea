//! Glyph table and character resolution
//!
//! Glyphs are stored column by column. Each column byte holds one pixel
//! column of the character: bit 7 is a blank spacer row, bits 6..0 are the
//! seven pixel rows from top to bottom.

mod font5x7;

pub use font5x7::FONT_5X7;

/// Number of column bytes per glyph
pub const GLYPH_WIDTH: usize = 5;

/// Number of row shifts needed to fully replace one column byte
pub const ROW_STEPS: u8 = 8;

/// First character code present in the font
pub const FIRST_CHAR: u8 = 0x20;

/// Last character code present in the font
pub const LAST_CHAR: u8 = 0x7F;

/// Code whose glyph is shown for characters the font does not cover
pub const UNKNOWN_CHAR: u8 = 0x7F;

/// Column bitmap of one character
pub type Glyph = [u8; GLYPH_WIDTH];

/// Map a character code onto a code present in the font
///
/// `0` (string terminator) shows as a space, anything outside
/// `FIRST_CHAR..=LAST_CHAR` shows as the unknown glyph.
pub const fn resolve(code: u8) -> u8 {
    match code {
        0 => b' ',
        FIRST_CHAR..=LAST_CHAR => code,
        _ => UNKNOWN_CHAR,
    }
}

/// Convert a `char` to the code stored in a display cell
///
/// Characters beyond Latin-1 have no single-byte code and become
/// `UNKNOWN_CHAR`.
pub fn char_code(ch: char) -> u8 {
    u8::try_from(ch).unwrap_or(UNKNOWN_CHAR)
}

/// Source of glyph bitmaps
///
/// Must be total: every code returns some glyph.
pub trait GlyphTable {
    /// Column bytes of the glyph for `code`
    fn columns(&self, code: u8) -> &Glyph;
}

impl<G: GlyphTable + ?Sized> GlyphTable for &G {
    fn columns(&self, code: u8) -> &Glyph {
        (**self).columns(code)
    }
}

/// Built-in 5x7 ASCII font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Font5x7;

impl GlyphTable for Font5x7 {
    fn columns(&self, code: u8) -> &Glyph {
        &FONT_5X7[(resolve(code) - FIRST_CHAR) as usize]
    }
}
