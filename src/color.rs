//! 16-bit RGB565 color, transmitted high byte first.

/// A packed RGB565 value: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565(0x0000);
    pub const WHITE: Rgb565 = Rgb565(0xFFFF);
    pub const RED: Rgb565 = Rgb565(0xF800);
    pub const GREEN: Rgb565 = Rgb565(0x07E0);
    pub const BLUE: Rgb565 = Rgb565(0x001F);

    /// Pack 8-bit channels, truncating to 5/6/5 bits.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb565(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }

    /// Wrap an already-packed RGB565 value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Rgb565(raw)
    }

    /// The packed 16-bit value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The two wire bytes, high byte first.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Rebuild a color from its two wire bytes.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Rgb565(u16::from_be_bytes(bytes))
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Rgb565(raw)
    }
}
