//! Command/data framing over the SPI bus and the CS / D/C control lines.
//!
//! Every call here is one bus transaction: chip-select asserted low, the
//! data/command line driven (low for an opcode, high for anything else),
//! the bytes shifted out MSB-first, the bus flushed, chip-select released.
//! There are no retries and no timeouts; completion is whatever the HAL's
//! blocking `SpiBus` gives us.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::command::Instruction;
use crate::error::Error;

/// Owns the bus plus the chip-select and data/command lines.
pub struct SpiInterface<SPI, CS, DC> {
    spi: SPI,
    cs: CS,
    dc: DC,
}

impl<SPI, CS, DC, SpiE, PinE> SpiInterface<SPI, CS, DC>
where
    SPI: SpiBus<u8, Error = SpiE>,
    CS: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
{
    pub fn new(spi: SPI, cs: CS, dc: DC) -> Self {
        SpiInterface { spi, cs, dc }
    }

    /// Park chip-select in its idle (deasserted) state.
    pub fn idle(&mut self) -> Result<(), Error<SpiE, PinE>> {
        self.cs.set_high().map_err(Error::Pin)
    }

    /// Send one opcode byte with D/C low.
    pub fn write_command(&mut self, instruction: Instruction) -> Result<(), Error<SpiE, PinE>> {
        self.cs.set_low().map_err(Error::Pin)?;
        self.dc.set_low().map_err(Error::Pin)?;
        self.spi.write(&[instruction.opcode()]).map_err(Error::Spi)?;
        self.spi.flush().map_err(Error::Spi)?;
        self.cs.set_high().map_err(Error::Pin)
    }

    /// Send argument or pixel bytes with D/C high.
    pub fn write_data(&mut self, data: &[u8]) -> Result<(), Error<SpiE, PinE>> {
        self.cs.set_low().map_err(Error::Pin)?;
        self.dc.set_high().map_err(Error::Pin)?;
        self.spi.write(data).map_err(Error::Spi)?;
        self.spi.flush().map_err(Error::Spi)?;
        self.cs.set_high().map_err(Error::Pin)
    }

    /// Send a 16-bit data word, high byte first.
    #[inline]
    pub fn write_data_word(&mut self, word: u16) -> Result<(), Error<SpiE, PinE>> {
        self.write_data(&word.to_be_bytes())
    }

    /// Give the bus and control lines back.
    pub fn release(self) -> (SPI, CS, DC) {
        (self.spi, self.cs, self.dc)
    }
}
