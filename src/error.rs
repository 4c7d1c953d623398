/// Error type that wraps SPI and GPIO errors plus the driver's own
/// recoverable conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<SpiE, PinE> {
    /// The SPI bus reported an error.
    Spi(SpiE),
    /// A control line reported an error.
    Pin(PinE),
    /// Window or cursor position exceeds the current screen bounds.
    OutOfRange,
    /// Character outside the printable ASCII range of the glyph table.
    InvalidCharacter,
}
