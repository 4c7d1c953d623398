//! The device handle: bring-up, addressing window and color streaming.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::color::Rgb565;
use crate::command::Instruction;
use crate::error::Error;
use crate::init::{InitCommand, INIT_ST7789};
use crate::interface::SpiInterface;
use crate::orientation::Orientation;
use crate::text::Cursor;

// Chunk size for streaming repeated color data. One stack buffer's worth
// of pre-packed pixels goes out per bus write.
const FILL_CHUNK: usize = 64;

/// ST7789 driver owning the SPI bus and the four control lines
/// (chip-select, backlight, data/command, reset).
///
/// `width`/`height` describe the panel in its native portrait orientation;
/// the logical bounds used for validation follow [`set_orientation`].
///
/// [`set_orientation`]: St7789::set_orientation
pub struct St7789<SPI, CS, BL, DC, RST> {
    iface: SpiInterface<SPI, CS, DC>,
    bl: BL,
    rst: RST,
    native_width: u16,
    native_height: u16,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) cursor: Cursor,
}

impl<SPI, CS, BL, DC, RST, SpiE, PinE> St7789<SPI, CS, BL, DC, RST>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    /// Create a handle for a panel of `width` x `height` pixels (native
    /// portrait orientation). No bus traffic happens until [`init`].
    ///
    /// [`init`]: St7789::init
    pub fn new(spi: SPI, cs: CS, bl: BL, dc: DC, rst: RST, width: u16, height: u16) -> Self {
        St7789 {
            iface: SpiInterface::new(spi, cs, dc),
            bl,
            rst,
            native_width: width,
            native_height: height,
            width,
            height,
            cursor: Cursor::default(),
        }
    }

    /// Initialize the panel: power-up settle, hardware reset, the shipped
    /// init table, then the default orientation. Call once at startup.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<SpiE, PinE>> {
        self.init_with(INIT_ST7789, delay)
    }

    /// Like [`init`] but replaying a caller-supplied command table, for
    /// controller revisions that need different bring-up values.
    ///
    /// [`init`]: St7789::init
    pub fn init_with(
        &mut self,
        table: &[InitCommand],
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<SpiE, PinE>> {
        // Idle levels: chip deselected, backlight on, reset held high.
        self.iface.idle()?;
        self.bl.set_high().map_err(Error::Pin)?;
        self.rst.set_high().map_err(Error::Pin)?;

        // Power-up time, no hard limit.
        delay.delay_ms(10);

        self.hard_reset(delay)?;
        self.run_table(table, delay)?;
        self.set_orientation(Orientation::default())
    }

    /// Pulse the reset line: >10us low, then >120ms for the controller to
    /// come back up.
    pub fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<SpiE, PinE>> {
        self.rst.set_low().map_err(Error::Pin)?;
        delay.delay_us(100);
        self.rst.set_high().map_err(Error::Pin)?;
        delay.delay_ms(120);
        Ok(())
    }

    fn run_table(
        &mut self,
        table: &[InitCommand],
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<SpiE, PinE>> {
        for step in table {
            self.iface.write_command(step.instruction)?;
            if !step.args.is_empty() {
                self.iface.write_data(step.args)?;
            }
            delay.delay_ms(step.delay_ms as u32);
        }
        Ok(())
    }

    /// Program rotation/mirror/color order and update the logical screen
    /// bounds: 90/270 degree rotations exchange width and height.
    ///
    /// Must run before any drawing; windows validated under one
    /// orientation and streamed under another address the wrong pixels.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Madctl)?;
        self.iface.write_data(&[orientation.madctl()])?;
        if orientation.rotation.swaps_axes() {
            self.width = self.native_height;
            self.height = self.native_width;
        } else {
            self.width = self.native_width;
            self.height = self.native_height;
        }
        Ok(())
    }

    /// Logical width under the current orientation.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height under the current orientation.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Logical (width, height) under the current orientation.
    #[inline]
    pub fn screen_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Program the rectangular memory window targeted by the next pixel
    /// stream. Every pixel operation goes through here.
    ///
    /// Fails with [`Error::OutOfRange`] before any bus traffic if the
    /// rectangle is inverted or exceeds the current screen bounds.
    pub fn set_window(
        &mut self,
        xs: u16,
        xe: u16,
        ys: u16,
        ye: u16,
    ) -> Result<(), Error<SpiE, PinE>> {
        if xs > xe || xe >= self.width || ys > ye || ye >= self.height {
            return Err(Error::OutOfRange);
        }

        let ca = [(xs >> 8) as u8, xs as u8, (xe >> 8) as u8, xe as u8];
        let ra = [(ys >> 8) as u8, ys as u8, (ye >> 8) as u8, ye as u8];

        self.iface.write_command(Instruction::Caset)?;
        self.iface.write_data(&ca)?;
        self.iface.write_command(Instruction::Raset)?;
        self.iface.write_data(&ra)?;
        Ok(())
    }

    /// Open a memory write and stream `count` repetitions of `color` as
    /// one continuous big-endian stream.
    pub fn fill_color(&mut self, color: Rgb565, count: u32) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Ramwr)?;

        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        // Byte count stays in u64: `count * 2` does not fit usize on
        // 16-bit targets, where a full-screen fill already needs more
        // than 65535 bytes.
        let mut remaining = u64::from(count) * 2;
        while remaining > 0 {
            let take = remaining.min(chunk.len() as u64) as usize;
            self.iface.write_data(&chunk[..take])?;
            remaining -= take as u64;
        }
        Ok(())
    }

    /// Display on (recover from display-off).
    pub fn display_on(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Dispon)
    }

    /// Display off: blank page shown, frame memory kept.
    pub fn display_off(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Dispoff)
    }

    /// Invert the displayed colors.
    pub fn inversion_on(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Invon)
    }

    /// Back to non-inverted display.
    pub fn inversion_off(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Invoff)
    }

    /// Minimum power mode; memory keeps its contents.
    pub fn sleep_in(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Slpin)?;
        delay.delay_ms(5);
        Ok(())
    }

    /// Wake from sleep; panel scanning restarts.
    pub fn sleep_out(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Slpout)?;
        delay.delay_ms(120);
        Ok(())
    }

    /// Normal display mode (leaves partial mode).
    pub fn normal_mode(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.iface.write_command(Instruction::Noron)
    }

    pub fn backlight_on(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.bl.set_high().map_err(Error::Pin)
    }

    pub fn backlight_off(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.bl.set_low().map_err(Error::Pin)
    }

    /// Tear the handle down and give the bus and control lines back.
    pub fn release(self) -> (SPI, CS, BL, DC, RST) {
        let (spi, cs, dc) = self.iface.release();
        (spi, cs, self.bl, dc, self.rst)
    }
}
