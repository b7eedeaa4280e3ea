//! Uniform roll-over: every changed cell rolls in lock-step

use hcms_core::glyph::ROW_STEPS;

use super::Transition;
use crate::screen::ScreenBuffer;

/// Lock-step schedule
///
/// Runs exactly `ROW_STEPS` frames whatever the texts are. The screen
/// buffer is overwritten with the target after the last frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollover<const N: usize> {
    target: [u8; N],
    /// Shift used by the coming frame, `1..=ROW_STEPS` while running
    shift: u8,
}

impl<const N: usize> Rollover<N> {
    /// Start a transition toward `target`
    pub fn new(target: [u8; N]) -> Self {
        Self { target, shift: 1 }
    }

    /// Shift used by the coming frame
    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl<const N: usize> Transition<N> for Rollover<N> {
    fn target(&self) -> &[u8; N] {
        &self.target
    }

    fn is_finished(&self) -> bool {
        self.shift > ROW_STEPS
    }

    fn progress(&self, _index: usize) -> u8 {
        self.shift
    }

    fn advance(&mut self, screen: &mut ScreenBuffer<N>) {
        if self.is_finished() {
            return;
        }
        self.shift += 1;
        if self.is_finished() {
            screen.copy_from(&self.target);
        }
    }
}
