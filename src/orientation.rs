//! Memory data access control (MADCTL).
//!
//! The wire format is one bit-packed byte:
//!
//! ```text
//! D7  D6  D5  D4  D3  D2  D1  D0
//! MY  MX  MV  ML  RGB MH   -   -
//! ```
//!
//! MV exchanges rows and columns, MX/MY flip the address order on each
//! axis, RGB selects the panel color filter order. The driver keeps the
//! configuration as a tagged value and packs the byte only at the wire.

const MADCTL_MY: u8 = 0x80;
const MADCTL_MX: u8 = 0x40;
const MADCTL_MV: u8 = 0x20;
const MADCTL_BGR: u8 = 0x08;

/// Display rotation relative to the panel's native portrait orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Whether this rotation exchanges the row and column axes.
    #[inline]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Subpixel order of the panel's color filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

/// Rotation, mirroring and color order for the memory scan-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Orientation {
    pub rotation: Rotation,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub color_order: ColorOrder,
}

impl Orientation {
    pub const fn new(rotation: Rotation) -> Self {
        Orientation {
            rotation,
            mirror_x: false,
            mirror_y: false,
            color_order: ColorOrder::Rgb,
        }
    }

    pub const fn with_mirror_x(mut self) -> Self {
        self.mirror_x = true;
        self
    }

    pub const fn with_mirror_y(mut self) -> Self {
        self.mirror_y = true;
        self
    }

    pub const fn with_color_order(mut self, color_order: ColorOrder) -> Self {
        self.color_order = color_order;
        self
    }

    /// Pack into the MADCTL argument byte.
    pub const fn madctl(self) -> u8 {
        let mut b = match self.rotation {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => MADCTL_MV | MADCTL_MX,
            Rotation::Deg180 => MADCTL_MX | MADCTL_MY,
            Rotation::Deg270 => MADCTL_MV | MADCTL_MY,
        };
        if self.mirror_x {
            b ^= MADCTL_MX;
        }
        if self.mirror_y {
            b ^= MADCTL_MY;
        }
        if matches!(self.color_order, ColorOrder::Bgr) {
            b |= MADCTL_BGR;
        }
        b
    }

    /// Decode a MADCTL byte into the canonical tagged form.
    ///
    /// Rotation and mirroring overlap on the wire (both toggle MX/MY), so
    /// the decoder prefers the mirror-free reading where one exists;
    /// `from_madctl(b).madctl() == b` always holds.
    pub const fn from_madctl(b: u8) -> Self {
        let mv = b & MADCTL_MV != 0;
        let mx = b & MADCTL_MX != 0;
        let my = b & MADCTL_MY != 0;
        let (rotation, mirror_x, mirror_y) = match (mv, mx, my) {
            (false, false, false) => (Rotation::Deg0, false, false),
            (false, true, false) => (Rotation::Deg0, true, false),
            (false, false, true) => (Rotation::Deg0, false, true),
            (false, true, true) => (Rotation::Deg180, false, false),
            (true, true, false) => (Rotation::Deg90, false, false),
            (true, false, true) => (Rotation::Deg270, false, false),
            (true, false, false) => (Rotation::Deg90, true, false),
            (true, true, true) => (Rotation::Deg90, false, true),
        };
        let color_order = if b & MADCTL_BGR != 0 {
            ColorOrder::Bgr
        } else {
            ColorOrder::Rgb
        };
        Orientation {
            rotation,
            mirror_x,
            mirror_y,
            color_order,
        }
    }
}
