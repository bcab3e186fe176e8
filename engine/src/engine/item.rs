// engine/src/engine/item.rs
#![forbid(unsafe_code)]

use std::fmt;

use crate::engine::footprint::{Cell, Footprint, Orientation};

/// Opaque identity of a placed item. Issued by the visual factory; the core never interprets it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space pose handed to the visual collaborator.
///
/// `position` is the anchor cell on the floor plane (x, z in engine terms).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub position: (f32, f32),
    pub rotation_deg: f32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlacedItem {
    pub id: ItemId,
    pub footprint: Footprint,
    /// Minimum corner of the occupied rectangle.
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl PlacedItem {
    pub fn new(id: ItemId, footprint: Footprint, anchor: Cell) -> Self {
        Self {
            id,
            footprint,
            anchor,
            orientation: Orientation::NORTH,
        }
    }

    /// Quarter turn about the anchor: footprint axes swap, heading advances 90°.
    pub fn rotate(&mut self) {
        self.footprint.rotate();
        self.orientation.rotate_cw();
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.footprint.cells(self.anchor)
    }

    pub fn transform(&self) -> ItemTransform {
        ItemTransform {
            position: (self.anchor.x as f32, self.anchor.y as f32),
            rotation_deg: self.orientation.degrees(),
        }
    }
}

/// Last known valid pose of a selected item; restored on cancel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SavedPlacement {
    pub anchor: Cell,
    pub footprint: Footprint,
    pub orientation: Orientation,
}

impl SavedPlacement {
    pub fn of(item: &PlacedItem) -> Self {
        Self {
            anchor: item.anchor,
            footprint: item.footprint,
            orientation: item.orientation,
        }
    }

    pub fn restore(&self, item: &mut PlacedItem) {
        item.anchor = self.anchor;
        item.footprint = self.footprint;
        item.orientation = self.orientation;
    }
}
