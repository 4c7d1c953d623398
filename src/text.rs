//! Bitmap-font text rendering with a persistent cursor.
//!
//! The cursor lives in the device handle (not in module globals) so
//! independent displays keep independent text state.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::color::Rgb565;
use crate::driver::St7789;
use crate::error::Error;
use crate::font::{glyph, FontSize, CHAR_ROWS};

/// Column the cursor falls back to when [`St7789::set_position`] gets an
/// x beyond the screen but a valid y. Kept for compatibility with the
/// original driver family.
pub const TEXT_FALLBACK_COLUMN: u16 = 2;

/// Top-left device coordinate of the next character cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub x: u16,
    pub y: u16,
}

impl<SPI, CS, BL, DC, RST, SpiE, PinE> St7789<SPI, CS, BL, DC, RST>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    /// Move the text cursor.
    ///
    /// Fails with [`Error::OutOfRange`] only when both coordinates exceed
    /// the screen. A quirk inherited from the original driver: when only
    /// x is out of bounds, the row is still applied and the column drops
    /// to [`TEXT_FALLBACK_COLUMN`].
    pub fn set_position(&mut self, x: u16, y: u16) -> Result<(), Error<SpiE, PinE>> {
        if x >= self.width && y >= self.height {
            return Err(Error::OutOfRange);
        }
        if x >= self.width {
            self.cursor.x = TEXT_FALLBACK_COLUMN;
        } else {
            self.cursor.x = x;
        }
        self.cursor.y = y;
        Ok(())
    }

    /// Render one character at the cursor and advance the cursor by the
    /// scale's character width.
    ///
    /// Fails with [`Error::InvalidCharacter`] (no bus traffic, cursor
    /// untouched) outside printable ASCII.
    pub fn draw_char(
        &mut self,
        ch: char,
        color: Rgb565,
        size: FontSize,
    ) -> Result<(), Error<SpiE, PinE>> {
        let glyph = glyph(ch).ok_or(Error::InvalidCharacter)?;
        // Block coordinates are computed in u32: a saturated cursor plus
        // the glyph offsets can pass the top of the u16 range, and that
        // must surface as OutOfRange, not wrap back onto the screen.
        let cx = u32::from(self.cursor.x);
        let cy = u32::from(self.cursor.y);

        for (col, &bits) in glyph.iter().enumerate() {
            let col = col as u32;
            for row in 0..CHAR_ROWS {
                if bits & (1 << row) == 0 {
                    continue;
                }
                let row = u32::from(row);
                // One window + one stream per set bit, sized per scale.
                match size {
                    FontSize::X1 => {
                        let (x, y) = (cx + col, cy + row);
                        self.glyph_block(x, x, y, y, color, 1)?;
                    }
                    FontSize::X2 => {
                        let (x, y) = (cx + col, cy + 2 * row);
                        self.glyph_block(x, x, y, y + 1, color, 2)?;
                    }
                    FontSize::X3 => {
                        let (x, y) = (cx + 2 * col, cy + 2 * row);
                        self.glyph_block(x, x + 1, y, y + 1, color, 4)?;
                    }
                }
            }
        }

        self.cursor.x = self.cursor.x.saturating_add(size.advance());
        Ok(())
    }

    /// Stream one solid glyph block. Coordinates past the u16 range are
    /// out of range by definition; everything else goes through the
    /// window validation.
    fn glyph_block(
        &mut self,
        xs: u32,
        xe: u32,
        ys: u32,
        ye: u32,
        color: Rgb565,
        count: u32,
    ) -> Result<(), Error<SpiE, PinE>> {
        let narrow = |v: u32| u16::try_from(v).map_err(|_| Error::OutOfRange);
        self.set_window(narrow(xs)?, narrow(xe)?, narrow(ys)?, narrow(ye)?)?;
        self.fill_color(color, count)
    }

    /// Render a string left to right from the cursor. No wrapping and no
    /// cursor reset: the column keeps growing until the window check
    /// rejects the next visible glyph.
    pub fn draw_string(
        &mut self,
        text: &str,
        color: Rgb565,
        size: FontSize,
    ) -> Result<(), Error<SpiE, PinE>> {
        for ch in text.chars() {
            self.draw_char(ch, color, size)?;
        }
        Ok(())
    }
}
