//! Driver for the Sitronix ST7789 LCD controller over 4-wire SPI.
//!
//! Works with any `embedded-hal` 1.0 HAL. The driver owns the chip-select,
//! backlight, data/command and reset lines itself and takes a plain
//! [`SpiBus`](embedded_hal::spi::SpiBus), so no `SpiDevice` wrapper is needed.
//!
//! Protocol (4-wire SPI):
//!   D/C low selects a command byte, D/C high selects argument/pixel bytes.
//!   Example: [0x11]          -> Sleep Out
//!            [0x3A] + [0x55] -> Pixel Format = 16bpp (RGB565)
//! Pixel data is RGB565, high byte first.
//!
//! # Example
//!
//! ```no_run
//! use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
//! use st7789_lcd::{FontSize, Rgb565, St7789};
//!
//! fn run<SPI, CS, BL, DC, RST, SpiE, PinE>(
//!     spi: SPI,
//!     cs: CS,
//!     bl: BL,
//!     dc: DC,
//!     rst: RST,
//!     delay: &mut impl DelayNs,
//! ) -> Result<(), st7789_lcd::Error<SpiE, PinE>>
//! where
//!     SPI: SpiBus<u8, Error = SpiE>,
//!     CS: OutputPin<Error = PinE>,
//!     BL: OutputPin<Error = PinE>,
//!     DC: OutputPin<Error = PinE>,
//!     RST: OutputPin<Error = PinE>,
//! {
//!     let mut lcd = St7789::new(spi, cs, bl, dc, rst, 240, 280);
//!     lcd.init(delay)?;
//!     lcd.clear_screen(Rgb565::BLACK)?;
//!     lcd.fast_horizontal(10, 229, 15, Rgb565::WHITE)?;
//!     lcd.set_position(10, 30)?;
//!     lcd.draw_string("HELLO", Rgb565::RED, FontSize::X2)?;
//!     Ok(())
//! }
//! ```

#![no_std]

pub mod color;
pub mod command;
mod draw;
pub mod error;
pub mod font;
pub mod init;
pub mod interface;
pub mod orientation;
mod text;

mod driver;

#[cfg(feature = "graphics")]
mod graphics;

pub use color::Rgb565;
pub use command::Instruction;
pub use error::Error;
pub use font::{FontSize, FONT_5X8};
pub use init::{InitCommand, INIT_ST7789};
pub use interface::SpiInterface;
pub use orientation::{ColorOrder, Orientation, Rotation};
pub use text::TEXT_FALLBACK_COLUMN;

pub use driver::St7789;

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode the controller expects (CPOL = 0, CPHA = 0, MSB first).
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};
