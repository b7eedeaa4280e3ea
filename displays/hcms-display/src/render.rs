//! Column byte emission
//!
//! Every character is sent as `GLYPH_WIDTH` column bytes, cell 0 first.
//! The cursor cell is shown in inverse video by XOR-ing its columns with
//! `0xFF`.

use hcms_core::glyph::{Glyph, GlyphTable};
use hcms_core::traits::{Transport, TransportError, TransportExt, WriteMode};

/// XOR mask for a cell shown under the cursor
pub const INVERT_MASK: u8 = 0xFF;

const fn mask(inverted: bool) -> u8 {
    if inverted {
        INVERT_MASK
    } else {
        0
    }
}

/// Send ready-made column bytes for one cell
pub fn draw_columns<T: Transport>(
    transport: &mut T,
    columns: &Glyph,
    inverted: bool,
) -> Result<(), TransportError> {
    let mask = mask(inverted);
    for &column in columns {
        transport.send_byte(column ^ mask, WriteMode::Data)?;
    }
    Ok(())
}

/// Send the glyph of one character
///
/// Does not touch chip-select; callers batch cells inside one transaction.
pub fn draw_char<T: Transport, G: GlyphTable>(
    transport: &mut T,
    glyphs: &G,
    code: u8,
    inverted: bool,
) -> Result<(), TransportError> {
    draw_columns(transport, glyphs.columns(code), inverted)
}

/// Send a full frame: every cell in order, inverting the cursor cell
pub fn draw_all<T: Transport, G: GlyphTable>(
    transport: &mut T,
    glyphs: &G,
    cells: &[u8],
    cursor: Option<usize>,
) -> Result<(), TransportError> {
    transport.transaction(WriteMode::Data, |t| {
        for (index, &code) in cells.iter().enumerate() {
            draw_char(t, glyphs, code, cursor == Some(index))?;
        }
        Ok(())
    })
}

/// Send raw column bytes, bypassing the font
pub fn draw_raw<T: Transport>(transport: &mut T, columns: &[u8]) -> Result<(), TransportError> {
    transport.transaction(WriteMode::Data, |t| t.send_bytes(columns, WriteMode::Data))
}
