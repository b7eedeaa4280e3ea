//! Screen buffer
//!
//! One character code per display cell. The buffer always holds exactly
//! `N` cells: shorter text is padded with spaces, longer text truncated.

use heapless::String;

use hcms_core::glyph::{char_code, resolve, UNKNOWN_CHAR};

/// Code used to pad short text
pub const BLANK: u8 = b' ';

/// Contents of an `N`-character display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBuffer<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> Default for ScreenBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ScreenBuffer<N> {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self { cells: [BLANK; N] }
    }

    /// Create a buffer holding `text`, padded or truncated to `N` cells
    pub fn from_text(text: &str) -> Self {
        let mut screen = Self::new();
        screen.set(text);
        screen
    }

    /// Replace every cell with `text`, padded or truncated to `N` cells
    pub fn set(&mut self, text: &str) {
        let mut chars = text.chars();
        for cell in self.cells.iter_mut() {
            *cell = chars.next().map_or(BLANK, char_code);
        }
    }

    /// Replace every cell with raw character codes
    ///
    /// Codes are stored as given; unsupported ones render as the
    /// fallback glyph.
    pub fn set_codes(&mut self, codes: &[u8]) {
        let mut codes = codes.iter();
        for cell in self.cells.iter_mut() {
            *cell = codes.next().copied().unwrap_or(BLANK);
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells = [BLANK; N];
    }

    /// All cells
    pub fn cells(&self) -> &[u8; N] {
        &self.cells
    }

    /// Code at `index`, if in range
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Overwrite a single cell; out-of-range indices are ignored
    pub fn set_cell(&mut self, index: usize, code: u8) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = code;
        }
    }

    /// Overwrite every cell from a full snapshot
    pub fn copy_from(&mut self, cells: &[u8; N]) {
        self.cells = *cells;
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-width display
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Printable copy of the contents
    ///
    /// Codes the font cannot show come out as `?`.
    pub fn text(&self) -> String<N> {
        let mut text = String::new();
        for &code in &self.cells {
            let ch = match resolve(code) {
                UNKNOWN_CHAR => '?',
                printable => printable as char,
            };
            // One ASCII byte per cell, capacity is exactly N
            let _ = text.push(ch);
        }
        text
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for ScreenBuffer<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[{}]", self.text().as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_blank() {
        let screen = ScreenBuffer::<8>::new();
        assert_eq!(screen.cells(), &[BLANK; 8]);
        assert_eq!(screen.len(), 8);
    }

    #[test]
    fn test_short_text_is_padded() {
        let screen = ScreenBuffer::<8>::from_text("HI");
        assert_eq!(screen.cells(), b"HI      ");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let screen = ScreenBuffer::<4>::from_text("Hello, World!");
        assert_eq!(screen.cells(), b"Hell");
    }

    #[test]
    fn test_clear_matches_empty_text() {
        let mut cleared = ScreenBuffer::<8>::from_text("ABCDEFGH");
        cleared.clear();
        assert_eq!(cleared, ScreenBuffer::<8>::from_text(""));
    }

    #[test]
    fn test_set_codes_keeps_raw_values() {
        let mut screen = ScreenBuffer::<4>::new();
        screen.set_codes(&[0x01, b'A', 0xFF]);
        assert_eq!(screen.cells(), &[0x01, b'A', 0xFF, BLANK]);
        assert_eq!(screen.text().as_str(), "?A? ");
    }

    #[test]
    fn test_non_ascii_text() {
        let screen = ScreenBuffer::<3>::from_text("a\u{263a}b");
        assert_eq!(screen.cells(), &[b'a', UNKNOWN_CHAR, b'b']);
    }

    #[test]
    fn test_set_cell_out_of_range() {
        let mut screen = ScreenBuffer::<2>::new();
        screen.set_cell(1, b'X');
        screen.set_cell(5, b'Y');
        assert_eq!(screen.cells(), b" X");
        assert_eq!(screen.cell(5), None);
    }

    proptest! {
        #[test]
        fn prop_short_text_padded(text in "[ -~]{0,8}") {
            let screen = ScreenBuffer::<8>::from_text(&text);
            let len = text.len();
            prop_assert_eq!(&screen.cells()[..len], text.as_bytes());
            prop_assert!(screen.cells()[len..].iter().all(|&c| c == BLANK));
        }

        #[test]
        fn prop_long_text_truncated(text in "[ -~]{9,40}") {
            let screen = ScreenBuffer::<8>::from_text(&text);
            prop_assert_eq!(&screen.cells()[..], &text.as_bytes()[..8]);
        }
    }
}
