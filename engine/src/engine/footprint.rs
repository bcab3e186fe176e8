// engine/src/engine/footprint.rs
#![forbid(unsafe_code)]

use std::fmt;

use crate::engine::constants::{QUARTER_TURNS, ROTATION_STEP_DEG};

/// Grid coordinate. Signed so drag candidates left of / above the floor stay representable.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular cell span an item occupies, measured from its anchor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    pub const UNIT: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both extents are non-zero.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Quarter turn in place: swaps the axes.
    #[inline]
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }

    #[inline]
    pub fn rotated(mut self) -> Self {
        self.rotate();
        self
    }

    #[inline]
    pub fn area(self) -> u32 {
        self.width * self.height
    }

    /// True iff `[anchor, anchor + self)` lies inside `[0, width) x [0, height)`.
    pub fn fits_within(self, anchor: Cell, width: u32, height: u32) -> bool {
        if anchor.x < 0 || anchor.y < 0 {
            return false;
        }
        let right = i64::from(anchor.x) + i64::from(self.width);
        let bottom = i64::from(anchor.y) + i64::from(self.height);
        right <= i64::from(width) && bottom <= i64::from(height)
    }

    /// Cells covered when anchored at `anchor`, row-major.
    ///
    /// Cells whose coordinates would leave the `i32` range are skipped, so a tentative
    /// anchor dragged arbitrarily far never overflows.
    pub fn cells(self, anchor: Cell) -> impl Iterator<Item = Cell> {
        let (x0, y0) = (i64::from(anchor.x), i64::from(anchor.y));
        let (w, h) = (i64::from(self.width), i64::from(self.height));
        (y0..y0 + h)
            .map_while(|y| i32::try_from(y).ok())
            .flat_map(move |y| {
                (x0..x0 + w)
                    .map_while(|x| i32::try_from(x).ok())
                    .map(move |x| Cell::new(x, y))
            })
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Visual heading in quarter turns (0..4).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Orientation(u8);

impl Orientation {
    pub const NORTH: Orientation = Orientation(0);

    pub fn from_quarter_turns(turns: u8) -> Self {
        Self(turns % QUARTER_TURNS)
    }

    #[inline]
    pub fn quarter_turns(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn rotate_cw(&mut self) {
        self.0 = (self.0 + 1) % QUARTER_TURNS;
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        f32::from(self.0) * ROTATION_STEP_DEG
    }
}
