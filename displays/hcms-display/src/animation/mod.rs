//! Roll-over transitions between two strings
//!
//! A changed cell rolls vertically: the old glyph slides out while the new
//! one slides in, one pixel row per step, `ROW_STEPS` steps in total.
//! Cells whose code does not change are redrawn as-is every frame.
//!
//! Two schedules decide how far each cell has rolled in a given frame:
//! - [`Rollover`]: every cell advances together, `ROW_STEPS` frames
//! - [`SmoothRollover`]: cell `i` starts one frame after cell `i - 1`,
//!   `N + ROW_STEPS - 1` frames

pub mod merge;
pub mod rollover;
pub mod smooth;

pub use merge::{merge_column, merge_glyph, Direction};
pub use rollover::Rollover;
pub use smooth::SmoothRollover;

use hcms_core::glyph::GlyphTable;
use hcms_core::traits::{Transport, TransportError};

use crate::render::{draw_char, draw_columns};
use crate::screen::ScreenBuffer;

/// Transition schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionStyle {
    /// All cells roll in lock-step
    #[default]
    Uniform,
    /// Cells start one frame apart, left to right
    Staggered,
}

/// Frame-by-frame progress of one transition
///
/// The screen buffer holds the "old" text until a cell is committed;
/// `target` holds the new text.
pub trait Transition<const N: usize> {
    /// Text being rolled in, one code per cell
    fn target(&self) -> &[u8; N];

    /// True once no more frames are needed
    fn is_finished(&self) -> bool;

    /// Rows cell `index` has rolled in the coming frame (`0..=ROW_STEPS`)
    fn progress(&self, index: usize) -> u8;

    /// Step to the next frame, committing finished cells to `screen`
    fn advance(&mut self, screen: &mut ScreenBuffer<N>);
}

/// Send the cells of one transition frame
///
/// Chip-select is left to the caller.
pub fn draw_frame<T, G, A, const N: usize>(
    transport: &mut T,
    glyphs: &G,
    screen: &ScreenBuffer<N>,
    transition: &A,
    direction: Direction,
    cursor: Option<usize>,
) -> Result<(), TransportError>
where
    T: Transport,
    G: GlyphTable,
    A: Transition<N>,
{
    for (index, (&old, &new)) in screen.cells().iter().zip(transition.target()).enumerate() {
        let inverted = cursor == Some(index);
        if old == new {
            draw_char(transport, glyphs, new, inverted)?;
        } else {
            let merged = merge_glyph(
                glyphs.columns(old),
                glyphs.columns(new),
                transition.progress(index),
                direction,
            );
            draw_columns(transport, &merged, inverted)?;
        }
    }
    Ok(())
}
