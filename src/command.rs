//! ST7789 command set.

/// Commands understood by the controller, by datasheet name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Instruction {
    /// Empty command, terminates an open pixel stream.
    Nop = 0x00,
    /// Software reset; registers return to their defaults.
    Swreset = 0x01,
    /// Sleep in: DC/DC converter, oscillator and panel scanning stop.
    Slpin = 0x10,
    /// Sleep out: DC/DC converter, oscillator and panel scanning start.
    Slpout = 0x11,
    /// Partial display mode on.
    Ptlon = 0x12,
    /// Normal display mode on (partial mode off).
    Noron = 0x13,
    /// Display inversion off.
    Invoff = 0x20,
    /// Display inversion on.
    Invon = 0x21,
    /// Display off: frame memory output disabled, blank page inserted.
    Dispoff = 0x28,
    /// Display on: frame memory output enabled.
    Dispon = 0x29,
    /// Column address set: 16-bit XS and XE, big-endian.
    Caset = 0x2A,
    /// Row address set: 16-bit YS and YE, big-endian.
    Raset = 0x2B,
    /// Memory write: opens an open-ended pixel stream into the window.
    Ramwr = 0x2C,
    /// Partial area.
    Ptlar = 0x30,
    /// Tearing effect line off.
    Teoff = 0x34,
    /// Tearing effect line on.
    Teon = 0x35,
    /// Memory data access control (rotation / mirror / color order).
    Madctl = 0x36,
    /// Vertical scroll start address of RAM.
    Vscsad = 0x37,
    /// Idle mode off.
    Idmoff = 0x38,
    /// Idle mode on.
    Idmon = 0x39,
    /// Interface pixel format (0x55 = 16bpp, 0x05 = 12bpp).
    Colmod = 0x3A,
    /// Write CTRL display.
    Wrctrld = 0x53,
}

impl Instruction {
    /// The opcode byte as it goes on the wire.
    #[inline]
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}
