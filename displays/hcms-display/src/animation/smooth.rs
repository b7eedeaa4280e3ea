//! Staggered roll-over: a diagonal sweep from left to right
//!
//! Each cell has its own shift counter. The counters form a shift
//! register: every frame the whole vector moves one cell to the right and
//! cell 0 counts up from 1 to `ROW_STEPS`, then drops to 0. Cell `i`
//! therefore replays cell 0's sequence `i` frames later.
//!
//! ```text
//! frame 1:  1 0 0 0
//! frame 2:  2 1 0 0
//! frame 3:  3 2 1 0
//!   ...
//! frame 9:  0 8 7 6      <- cell 0 done and committed
//!   ...
//! frame 11: 0 0 0 8
//! ```

use hcms_core::glyph::ROW_STEPS;

use super::Transition;
use crate::screen::ScreenBuffer;

/// Staggered schedule
///
/// Runs `N + ROW_STEPS - 1` frames. Finished cells are copied into the
/// screen buffer from the left as soon as every cell before them is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothRollover<const N: usize> {
    target: [u8; N],
    /// Shift counter per cell; 0 = not started or finished
    progress: [u8; N],
}

impl<const N: usize> SmoothRollover<N> {
    /// Start a transition toward `target`
    pub fn new(target: [u8; N]) -> Self {
        let mut progress = [0; N];
        if let Some(first) = progress.first_mut() {
            *first = 1;
        }
        Self { target, progress }
    }

    /// Shift counters for the coming frame
    pub fn counters(&self) -> &[u8; N] {
        &self.progress
    }
}

impl<const N: usize> Transition<N> for SmoothRollover<N> {
    fn target(&self) -> &[u8; N] {
        &self.target
    }

    fn is_finished(&self) -> bool {
        self.progress.iter().all(|&shift| shift == 0)
    }

    fn progress(&self, index: usize) -> u8 {
        self.progress.get(index).copied().unwrap_or(0)
    }

    fn advance(&mut self, screen: &mut ScreenBuffer<N>) {
        if N > 1 {
            self.progress.copy_within(0..N - 1, 1);
        }

        if let Some(first) = self.progress.first_mut() {
            if *first != 0 {
                *first += 1;
                if *first > ROW_STEPS {
                    *first = 0;
                }
            }
        }

        // Commit the finished prefix only; cells right of a running one
        // still show their old text even when their counter is 0
        for (index, &shift) in self.progress.iter().enumerate() {
            if shift != 0 {
                break;
            }
            screen.set_cell(index, self.target[index]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<const N: usize>(screen: &mut ScreenBuffer<N>, target: [u8; N]) -> Vec<[u8; N]> {
        let mut smooth = SmoothRollover::new(target);
        let mut frames = Vec::new();
        while !smooth.is_finished() {
            frames.push(*smooth.counters());
            smooth.advance(screen);
        }
        frames
    }

    #[test]
    fn test_initial_counters() {
        let smooth = SmoothRollover::new(*b"ABCD");
        assert_eq!(smooth.counters(), &[1, 0, 0, 0]);
        assert!(!smooth.is_finished());
    }

    #[test]
    fn test_schedule_is_staggered() {
        let mut screen = ScreenBuffer::<4>::from_text("abcd");
        let frames = run(&mut screen, *b"ABCD");

        assert_eq!(frames.len(), 4 + ROW_STEPS as usize - 1);
        assert_eq!(frames[0], [1, 0, 0, 0]);
        assert_eq!(frames[1], [2, 1, 0, 0]);
        assert_eq!(frames[2], [3, 2, 1, 0]);
        assert_eq!(frames[8], [0, 8, 7, 6]);
        assert_eq!(frames[10], [0, 0, 0, 8]);
        assert_eq!(screen.cells(), b"ABCD");
    }

    #[test]
    fn test_every_cell_sees_every_shift() {
        let mut screen = ScreenBuffer::<3>::from_text("abc");
        let frames = run(&mut screen, *b"xyz");
        for cell in 0..3 {
            let seen: Vec<u8> = frames.iter().map(|f| f[cell]).filter(|&s| s != 0).collect();
            assert_eq!(seen, (1..=ROW_STEPS).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_commit_is_prefix_only() {
        let mut screen = ScreenBuffer::<3>::from_text("abc");
        let mut smooth = SmoothRollover::new(*b"xyz");

        smooth.advance(&mut screen);
        // Cells 1 and 2 have counter 0 here but cell 0 is still running
        assert_eq!(smooth.counters(), &[2, 1, 0]);
        assert_eq!(screen.cells(), b"abc");

        for _ in 0..7 {
            smooth.advance(&mut screen);
        }
        assert_eq!(smooth.counters(), &[0, 8, 7]);
        assert_eq!(screen.cells(), b"xbc");
    }

    #[test]
    fn test_single_cell() {
        let mut screen = ScreenBuffer::<1>::from_text("a");
        let frames = run(&mut screen, *b"b");
        assert_eq!(frames.len(), ROW_STEPS as usize);
        assert_eq!(screen.cells(), b"b");
    }

    #[test]
    fn test_zero_width_is_finished() {
        let smooth = SmoothRollover::<0>::new([]);
        assert!(smooth.is_finished());
    }
}
