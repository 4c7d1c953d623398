//! embedded-graphics integration (feature `graphics`).
//!
//! Unbuffered: every drawn pixel goes straight to the wire through the
//! window/stream primitives, so iterator-heavy drawing is simple but
//! slow. Solid rectangles and `clear` take the fast fill path.

use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::color::Rgb565;
use crate::driver::St7789;
use crate::error::Error;

impl From<EgRgb565> for Rgb565 {
    fn from(c: EgRgb565) -> Self {
        Rgb565::from_raw(c.into_storage())
    }
}

impl<SPI, CS, BL, DC, RST, SpiE, PinE> OriginDimensions for St7789<SPI, CS, BL, DC, RST>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<SPI, CS, BL, DC, RST, SpiE, PinE> DrawTarget for St7789<SPI, CS, BL, DC, RST>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    type Color = EgRgb565;
    type Error = Error<SpiE, PinE>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<EgRgb565>>,
    {
        let (w, h) = self.screen_size();
        for Pixel(p, c) in pixels {
            if p.x < 0 || p.y < 0 {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x >= w || y >= h {
                continue;
            }
            self.draw_pixel(x, y, c.into())?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: EgRgb565) -> Result<(), Self::Error> {
        let bounds = Rectangle::new(Point::zero(), self.size());
        let area = area.intersection(&bounds);
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(()); // nothing visible
        };
        let (x0, y0) = (area.top_left.x as u16, area.top_left.y as u16);
        let (x1, y1) = (bottom_right.x as u16, bottom_right.y as u16);
        self.set_window(x0, x1, y0, y1)?;
        self.fill_color(color.into(), area.size.width * area.size.height)
    }

    fn clear(&mut self, color: EgRgb565) -> Result<(), Self::Error> {
        self.clear_screen(color.into())
    }
}
