//! Table-driven initialization.
//!
//! Bring-up is a fixed replay of command records; nothing branches on
//! device state. Different controller revisions ship different tables and
//! they are interchangeable through [`St7789::init_with`].
//!
//! [`St7789::init_with`]: crate::St7789::init_with

use crate::command::Instruction;

/// One step of an init table: an opcode, its argument bytes, and how long
/// to wait after sending it.
#[derive(Clone, Copy, Debug)]
pub struct InitCommand {
    pub instruction: Instruction,
    pub args: &'static [u8],
    pub delay_ms: u8,
}

/// Bring-up sequence for the ST7789.
///
/// Orientation is deliberately not part of the table; it is programmed
/// through [`St7789::set_orientation`] so the logical screen bounds can
/// never disagree with what MADCTL was last told.
///
/// [`St7789::set_orientation`]: crate::St7789::set_orientation
pub static INIT_ST7789: &[InitCommand] = &[
    // Software reset, no arguments, delay >120ms
    InitCommand {
        instruction: Instruction::Swreset,
        args: &[],
        delay_ms: 150,
    },
    // Out of sleep mode, no arguments, delay >120ms
    InitCommand {
        instruction: Instruction::Slpout,
        args: &[],
        delay_ms: 150,
    },
    // Interface pixel format: 16bpp RGB565
    InitCommand {
        instruction: Instruction::Colmod,
        args: &[0x55],
        delay_ms: 10,
    },
    // Main screen turn on
    InitCommand {
        instruction: Instruction::Dispon,
        args: &[],
        delay_ms: 200,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_shape() {
        assert_eq!(INIT_ST7789.len(), 4);
        assert_eq!(INIT_ST7789[0].instruction, Instruction::Swreset);
        assert_eq!(INIT_ST7789[2].args, &[0x55]);
        // reset and sleep-out settle times are datasheet minimums (>120ms)
        assert!(INIT_ST7789[0].delay_ms > 120);
        assert!(INIT_ST7789[1].delay_ms > 120);
    }
}
