//! Raster primitives: pixels, fast axis-aligned fills, lines, clear.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::color::Rgb565;
use crate::driver::St7789;
use crate::error::Error;

impl<SPI, CS, BL, DC, RST, SpiE, PinE> St7789<SPI, CS, BL, DC, RST>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    /// Color a single pixel.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), Error<SpiE, PinE>> {
        self.set_window(x, x, y, y)?;
        self.fill_color(color, 1)
    }

    /// Color the horizontal span `xs..=xe` on row `y` with one window
    /// setup and one stream. Reversed endpoints are swapped.
    pub fn fast_horizontal(
        &mut self,
        xs: u16,
        xe: u16,
        y: u16,
        color: Rgb565,
    ) -> Result<(), Error<SpiE, PinE>> {
        let (xs, xe) = if xs > xe { (xe, xs) } else { (xs, xe) };
        self.set_window(xs, xe, y, y)?;
        self.fill_color(color, u32::from(xe - xs) + 1)
    }

    /// Color the vertical span `ys..=ye` on column `x` with one window
    /// setup and one stream. Reversed endpoints are swapped.
    pub fn fast_vertical(
        &mut self,
        x: u16,
        ys: u16,
        ye: u16,
        color: Rgb565,
    ) -> Result<(), Error<SpiE, PinE>> {
        let (ys, ye) = if ys > ye { (ye, ys) } else { (ys, ye) };
        self.set_window(x, x, ys, ye)?;
        self.fill_color(color, u32::from(ye - ys) + 1)
    }

    /// Fill the whole screen with one color.
    pub fn clear_screen(&mut self, color: Rgb565) -> Result<(), Error<SpiE, PinE>> {
        self.set_window(0, self.width - 1, 0, self.height - 1)?;
        self.fill_color(color, u32::from(self.width) * u32::from(self.height))
    }

    /// Draw a line with the integer Bresenham walk. A zero-length line
    /// plots exactly the start pixel; axis-aligned lines cover the same
    /// pixels as the corresponding fast fill.
    ///
    /// No bounds validation of its own: endpoints outside the screen fail
    /// pixel by pixel, so pre-clamp if that matters.
    pub fn draw_line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), Error<SpiE, PinE>> {
        let (mut x, mut y) = (i32::from(x1), i32::from(y1));
        let (xe, ye) = (i32::from(x2), i32::from(y2));
        let dx = (xe - x).abs();
        let dy = (ye - y).abs();
        let sx = if x < xe { 1 } else { -1 };
        let sy = if y < ye { 1 } else { -1 };

        if dy < dx {
            // shallow: walk x, error term decides when y steps
            let mut d = 2 * dy - dx;
            loop {
                self.draw_pixel(x as u16, y as u16, color)?;
                if x == xe {
                    break;
                }
                if d >= 0 {
                    y += sy;
                    d -= 2 * dx;
                }
                d += 2 * dy;
                x += sx;
            }
        } else {
            // steep: walk y, error term decides when x steps
            let mut d = 2 * dx - dy;
            loop {
                self.draw_pixel(x as u16, y as u16, color)?;
                if y == ye {
                    break;
                }
                if d >= 0 {
                    x += sx;
                    d -= 2 * dy;
                }
                d += 2 * dx;
                y += sy;
            }
        }
        Ok(())
    }
}
