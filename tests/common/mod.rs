//! Recording test doubles for the embedded-hal traits.
//!
//! Every chip-select edge, data/command edge, reset/backlight edge,
//! transferred byte and requested delay lands in one shared log, so tests
//! can assert the exact wire protocol including transaction bracketing.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::spi::{ErrorType as SpiErrorType, SpiBus};

use st7789_lcd::St7789;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    CsLow,
    CsHigh,
    DcLow,
    DcHigh,
    BlLow,
    BlHigh,
    RstLow,
    RstHigh,
    Byte(u8),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct SpyBus {
    log: Log,
}

impl SpiErrorType for SpyBus {
    type Error = Infallible;
}

impl SpiBus<u8> for SpyBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        for &b in words {
            log.push(Event::Byte(b));
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let copy = words.to_vec();
        words.fill(0);
        self.write(&copy)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// One recording output pin; `low`/`high` say which events it logs.
pub struct SpyPin {
    log: Log,
    low: Event,
    high: Event,
}

impl PinErrorType for SpyPin {
    type Error = Infallible;
}

impl OutputPin for SpyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(self.low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(self.high);
        Ok(())
    }
}

pub struct SpyDelay {
    log: Log,
}

impl DelayNs for SpyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub fn spy_bus(log: &Log) -> SpyBus {
    SpyBus {
        log: Rc::clone(log),
    }
}

pub fn spy_pin(log: &Log, low: Event, high: Event) -> SpyPin {
    SpyPin {
        log: Rc::clone(log),
        low,
        high,
    }
}

pub type SpyLcd = St7789<SpyBus, SpyPin, SpyPin, SpyPin, SpyPin>;

/// A driver wired to recording doubles, plus the shared log.
pub fn lcd(width: u16, height: u16) -> (Log, SpyLcd) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let pin = |low, high| SpyPin {
        log: Rc::clone(&log),
        low,
        high,
    };
    let lcd = St7789::new(
        SpyBus {
            log: Rc::clone(&log),
        },
        pin(Event::CsLow, Event::CsHigh),
        pin(Event::BlLow, Event::BlHigh),
        pin(Event::DcLow, Event::DcHigh),
        pin(Event::RstLow, Event::RstHigh),
        width,
        height,
    );
    (log, lcd)
}

pub fn delay(log: &Log) -> SpyDelay {
    SpyDelay {
        log: Rc::clone(log),
    }
}

pub fn events(log: &Log) -> Vec<Event> {
    log.borrow().clone()
}

pub fn clear(log: &Log) {
    log.borrow_mut().clear();
}

/// Just the bytes that crossed the bus, in order.
pub fn bytes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Byte(b) => Some(*b),
            _ => None,
        })
        .collect()
}

/// The byte stream split into commands: (opcode, argument/pixel bytes),
/// reconstructed from the recorded D/C edges.
pub fn transactions(log: &Log) -> Vec<(u8, Vec<u8>)> {
    let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
    let mut dc_high = false;
    for e in log.borrow().iter() {
        match e {
            Event::DcLow => dc_high = false,
            Event::DcHigh => dc_high = true,
            Event::Byte(b) if !dc_high => out.push((*b, Vec::new())),
            Event::Byte(b) => out
                .last_mut()
                .expect("data byte before any command")
                .1
                .push(*b),
            _ => {}
        }
    }
    out
}

const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;

/// One decoded window + memory-write: the programmed rectangle and the
/// pixel colors streamed into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillOp {
    pub xs: u16,
    pub xe: u16,
    pub ys: u16,
    pub ye: u16,
    pub colors: Vec<u16>,
}

fn word(args: &[u8], i: usize) -> u16 {
    u16::from_be_bytes([args[2 * i], args[2 * i + 1]])
}

/// Decode the log into window/stream operations.
pub fn fills(log: &Log) -> Vec<FillOp> {
    let mut out = Vec::new();
    let (mut xs, mut xe, mut ys, mut ye) = (0, 0, 0, 0);
    for (opcode, args) in transactions(log) {
        match opcode {
            CASET => {
                assert_eq!(args.len(), 4, "CASET takes 4 argument bytes");
                xs = word(&args, 0);
                xe = word(&args, 1);
            }
            RASET => {
                assert_eq!(args.len(), 4, "RASET takes 4 argument bytes");
                ys = word(&args, 0);
                ye = word(&args, 1);
            }
            RAMWR => {
                assert_eq!(args.len() % 2, 0, "pixel stream must be whole pixels");
                let colors = (0..args.len() / 2).map(|i| word(&args, i)).collect();
                out.push(FillOp {
                    xs,
                    xe,
                    ys,
                    ye,
                    colors,
                });
            }
            _ => {}
        }
    }
    out
}

/// Every pixel colored so far, expanding each stream row-major over its
/// window the way the controller fills memory.
pub fn pixel_set(log: &Log) -> BTreeSet<(u16, u16)> {
    let mut set = BTreeSet::new();
    for op in fills(log) {
        let mut remaining = op.colors.len();
        'op: for y in op.ys..=op.ye {
            for x in op.xs..=op.xe {
                if remaining == 0 {
                    break 'op;
                }
                set.insert((x, y));
                remaining -= 1;
            }
        }
    }
    set
}
