//! Display facade
//!
//! Owns the transport, glyph table, frame delay and screen buffer of one
//! chain of HCMS-29xx chips showing `N` characters.
//!
//! # Usage
//!
//! ```ignore
//! let mut display: Display<_, _, _, 8> =
//!     Display::new(transport, Font5x7, delay, &DisplayConfig::default());
//! display.init()?;
//! display.set_text("HELLO")?;
//! display.transition("WORLD", TransitionStyle::Staggered, Direction::Up)?;
//! ```

use embedded_hal::delay::DelayNs;

use hcms_core::config::DisplayConfig;
use hcms_core::control::{
    chip_count, init_sequence, Brightness, ControlWord0, ControlWord1, PeakCurrent,
};
use hcms_core::glyph::GlyphTable;
use hcms_core::traits::{Transport, TransportError, TransportExt, WriteMode};

use crate::animation::{
    draw_frame, Direction, Rollover, SmoothRollover, Transition, TransitionStyle,
};
use crate::render::{draw_all, draw_raw};
use crate::screen::ScreenBuffer;

/// Text display on a chain of HCMS-29xx chips
pub struct Display<T, G, D, const N: usize> {
    transport: T,
    glyphs: G,
    delay: D,
    screen: ScreenBuffer<N>,
    /// Cell shown in inverse video
    cursor: Option<usize>,
    word0: ControlWord0,
    word1: ControlWord1,
    frame_delay_ms: u32,
}

impl<T, G, D, const N: usize> Display<T, G, D, N>
where
    T: Transport,
    G: GlyphTable,
    D: DelayNs,
{
    /// Create a display; nothing is sent until [`Display::init`]
    pub fn new(transport: T, glyphs: G, delay: D, config: &DisplayConfig) -> Self {
        Self {
            transport,
            glyphs,
            delay,
            screen: ScreenBuffer::new(),
            cursor: None,
            word0: config.control_word0(),
            word1: config.control_word1(),
            frame_delay_ms: config.frame_delay_ms,
        }
    }

    /// Bring the chain into a known state after reset
    ///
    /// Blanks the dot registers, latches control word 1 into every chip,
    /// then writes control word 0 (brightness, current, sleep).
    pub fn init(&mut self) -> Result<(), TransportError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("init: {} cells, {} chips", N, chip_count(N));

        self.clear()?;
        for word in init_sequence(self.word1, chip_count(N)) {
            self.transport.write_control(word)?;
        }
        self.write_word0()
    }

    /// Show `text` immediately, padded or truncated to `N` cells
    pub fn set_text(&mut self, text: &str) -> Result<(), TransportError> {
        self.screen.set(text);
        self.render()
    }

    /// Show raw character codes immediately
    pub fn set_codes(&mut self, codes: &[u8]) -> Result<(), TransportError> {
        self.screen.set_codes(codes);
        self.render()
    }

    /// Blank the display and remove the cursor
    pub fn clear(&mut self) -> Result<(), TransportError> {
        self.cursor = None;
        self.set_text("")
    }

    /// Redraw the current buffer without changing it
    pub fn render(&mut self) -> Result<(), TransportError> {
        draw_all(
            &mut self.transport,
            &self.glyphs,
            self.screen.cells(),
            self.cursor,
        )
    }

    /// Roll from the current text to `text`
    ///
    /// Blocks until the last frame has been sent; the buffer then holds
    /// `text` exactly as [`Display::set_text`] would leave it. Returns the
    /// number of frames sent.
    pub fn transition(
        &mut self,
        text: &str,
        style: TransitionStyle,
        direction: Direction,
    ) -> Result<usize, TransportError> {
        let target = *ScreenBuffer::<N>::from_text(text).cells();

        #[cfg(feature = "defmt")]
        defmt::debug!("transition {} {} to {}", style, direction, text);

        let frames = match style {
            TransitionStyle::Uniform => self.run(Rollover::new(target), direction)?,
            TransitionStyle::Staggered => self.run(SmoothRollover::new(target), direction)?,
        };

        #[cfg(feature = "defmt")]
        defmt::trace!("transition done after {} frames", frames);

        Ok(frames)
    }

    /// Drive a transition to completion, one frame per delay period
    fn run<A: Transition<N>>(
        &mut self,
        mut transition: A,
        direction: Direction,
    ) -> Result<usize, TransportError> {
        let mut frames = 0;

        while !transition.is_finished() {
            let Self {
                transport,
                glyphs,
                screen,
                cursor,
                ..
            } = self;
            transport.transaction(WriteMode::Data, |t| {
                draw_frame(t, glyphs, screen, &transition, direction, *cursor)
            })?;

            transition.advance(&mut self.screen);
            self.delay.delay_ms(self.frame_delay_ms);
            frames += 1;
        }

        Ok(frames)
    }

    /// Move the inverse-video cursor and redraw
    ///
    /// Positions outside the display remove the cursor.
    pub fn set_cursor(&mut self, position: Option<usize>) -> Result<(), TransportError> {
        self.cursor = position.filter(|&p| p < N);
        self.render()
    }

    /// Current cursor cell
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Current buffer contents
    pub fn screen(&self) -> &ScreenBuffer<N> {
        &self.screen
    }

    /// Send raw column bytes, bypassing the font and the buffer
    pub fn write_raw(&mut self, columns: &[u8]) -> Result<(), TransportError> {
        draw_raw(&mut self.transport, columns)
    }

    /// Set the PWM brightness
    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<(), TransportError> {
        self.word0.brightness = brightness;
        self.write_word0()
    }

    /// Current PWM brightness
    pub fn brightness(&self) -> Brightness {
        self.word0.brightness
    }

    /// Set the peak pixel current
    pub fn set_peak_current(&mut self, current: PeakCurrent) -> Result<(), TransportError> {
        self.word0.peak_current = current;
        self.write_word0()
    }

    /// Wake the chips (`true`) or put them to sleep (`false`)
    ///
    /// Dot data survives sleep.
    pub fn set_power(&mut self, on: bool) -> Result<(), TransportError> {
        self.word0.sleep = !on;
        self.write_word0()
    }

    /// Pause between animation frames
    pub fn set_frame_delay(&mut self, ms: u32) {
        self.frame_delay_ms = ms;
    }

    /// Latch control word 0 into every chip
    ///
    /// In serial data-out mode a control byte only reaches the first chip,
    /// so one copy per chip is shifted through the chain.
    fn write_word0(&mut self) -> Result<(), TransportError> {
        let word = self.word0.to_byte();
        if self.word1.simultaneous {
            return self.transport.write_control(word);
        }
        self.transport.transaction(WriteMode::Command, |t| {
            for _ in 0..chip_count(N) {
                t.send_byte(word, WriteMode::Command)?;
            }
            Ok(())
        })
    }

    /// Give back the owned peripherals
    pub fn release(self) -> (T, G, D) {
        (self.transport, self.glyphs, self.delay)
    }
}
