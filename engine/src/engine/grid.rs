// engine/src/engine/grid.rs
#![forbid(unsafe_code)]

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::engine::constants::EMPTY_GLYPH;
use crate::engine::error::{PlacementError, RoomError};
use crate::engine::footprint::{Cell, Footprint};
use crate::engine::item::{ItemId, PlacedItem};

/// Result of a validated placement. A rejected item is handed back so ownership is never lost.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    Placed,
    Rejected {
        item: PlacedItem,
        reason: PlacementError,
    },
}

impl PlaceOutcome {
    #[inline]
    pub fn is_placed(&self) -> bool {
        matches!(self, PlaceOutcome::Placed)
    }
}

/// Floor occupancy: a row-major table of optional occupant ids plus the committed occupants.
///
/// Invariants:
/// - a cell holds at most one id;
/// - every occupant's cells are exactly its rectangle, fully inside the bounds;
/// - `cells` and `occupants` agree.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<ItemId>>,
    occupants: FxHashMap<ItemId, PlacedItem>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, RoomError> {
        if width == 0 || height == 0 {
            return Err(RoomError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            occupants: FxHashMap::default(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x as u32 >= self.width || cell.y as u32 >= self.height {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Bounds-only test of a rectangle.
    #[inline]
    pub fn contains(&self, anchor: Cell, footprint: Footprint) -> bool {
        footprint.fits_within(anchor, self.width, self.height)
    }

    /// Why `(anchor, footprint)` could not be committed right now, if anything.
    pub fn check(&self, anchor: Cell, footprint: Footprint) -> Result<(), PlacementError> {
        if !self.contains(anchor, footprint) {
            return Err(PlacementError::OutOfBounds {
                anchor,
                footprint,
                width: self.width,
                height: self.height,
            });
        }
        for cell in footprint.cells(anchor) {
            if let Some(by) = self.occupant_at(cell) {
                return Err(PlacementError::Occupied { cell, by });
            }
        }
        Ok(())
    }

    /// Every cell of the rectangle is in bounds and empty.
    #[inline]
    pub fn is_free(&self, anchor: Cell, footprint: Footprint) -> bool {
        self.check(anchor, footprint).is_ok()
    }

    /// Writes `item` without re-checking.
    ///
    /// Precondition: `is_free(item.anchor, item.footprint)` held immediately before.
    /// Prefer `try_place` unless the check was just made.
    pub fn place(&mut self, item: PlacedItem) {
        debug_assert!(
            self.contains(item.anchor, item.footprint),
            "place() outside bounds: {:?}",
            item
        );
        for cell in item.cells() {
            if let Some(i) = self.index(cell) {
                self.cells[i] = Some(item.id);
            }
        }
        self.occupants.insert(item.id, item);
    }

    /// Validate and write in one call. No mutation on rejection.
    pub fn try_place(&mut self, item: PlacedItem) -> PlaceOutcome {
        match self.check(item.anchor, item.footprint) {
            Ok(()) => {
                self.place(item);
                PlaceOutcome::Placed
            }
            Err(reason) => PlaceOutcome::Rejected { item, reason },
        }
    }

    /// Clears every cell holding `id` and returns its record. No-op if absent.
    pub fn remove(&mut self, id: ItemId) -> Option<PlacedItem> {
        for slot in self.cells.iter_mut() {
            if *slot == Some(id) {
                *slot = None;
            }
        }
        self.occupants.remove(&id)
    }

    /// Occupants whose rectangle would not fit a `new_width x new_height` floor, sorted by id.
    pub fn occupants_outside(&self, new_width: u32, new_height: u32) -> Vec<ItemId> {
        let mut out: Vec<ItemId> = self
            .occupants
            .values()
            .filter(|item| !item.footprint.fits_within(item.anchor, new_width, new_height))
            .map(|item| item.id)
            .collect();
        out.sort_unstable();
        out
    }

    /// Replaces the table with a `new_width x new_height` one, copying the overlapping
    /// region by coordinate.
    ///
    /// Occupants outside the new bounds must be evicted by the caller beforehand; any left
    /// over are dropped here so the table and the occupant set stay consistent.
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<(), RoomError> {
        if new_width == 0 || new_height == 0 {
            return Err(RoomError::InvalidDimensions {
                width: new_width,
                height: new_height,
            });
        }

        let stray = self.occupants_outside(new_width, new_height);
        for id in &stray {
            warn!(item = %id, "occupant not evicted before resize; dropping");
            self.remove(*id);
        }

        let (old_w, old_h) = (self.width as usize, self.height as usize);
        let (new_w, new_h) = (new_width as usize, new_height as usize);
        let mut cells = vec![None; new_w * new_h];
        for j in 0..old_h.min(new_h) {
            for i in 0..old_w.min(new_w) {
                cells[j * new_w + i] = self.cells[j * old_w + i];
            }
        }

        self.cells = cells;
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    #[inline]
    pub fn occupant_at(&self, cell: Cell) -> Option<ItemId> {
        self.index(cell).and_then(|i| self.cells[i])
    }

    #[inline]
    pub fn occupant(&self, id: ItemId) -> Option<&PlacedItem> {
        self.occupants.get(&id)
    }

    pub fn occupants(&self) -> impl Iterator<Item = &PlacedItem> {
        self.occupants.values()
    }

    #[inline]
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// First anchor, scanning rows top to bottom, where `footprint` is free.
    pub fn first_free_anchor(&self, footprint: Footprint) -> Option<Cell> {
        if footprint.width > self.width || footprint.height > self.height {
            return None;
        }
        let max_x = (self.width - footprint.width) as i32;
        let max_y = (self.height - footprint.height) as i32;
        (0..=max_y)
            .flat_map(|y| (0..=max_x).map(move |x| Cell::new(x, y)))
            .find(|&anchor| self.is_free(anchor, footprint))
    }

    pub fn render_ascii(&self) -> String {
        self.render_with_overlay(None)
    }

    /// ASCII floor; `overlay` (typically the selected item) is drawn as `@` on free cells
    /// and `!` where it collides.
    pub fn render_with_overlay(&self, overlay: Option<&PlacedItem>) -> String {
        let w = self.width as usize;
        let mut rows: Vec<Vec<char>> = (0..self.height as usize)
            .map(|y| {
                (0..w)
                    .map(|x| match self.cells[y * w + x] {
                        Some(id) => occupant_glyph(id),
                        None => EMPTY_GLYPH,
                    })
                    .collect()
            })
            .collect();

        if let Some(item) = overlay {
            for cell in item.cells() {
                if let Some(i) = self.index(cell) {
                    let glyph = if self.cells[i].is_some() { '!' } else { '@' };
                    rows[i / w][i % w] = glyph;
                }
            }
        }

        let border = format!("+{}+\n", "-".repeat(w));
        let mut s = String::with_capacity((w + 3) * (rows.len() + 2));
        s.push_str(&border);
        for row in rows {
            s.push('|');
            s.extend(row);
            s.push_str("|\n");
        }
        s.push_str(&border);
        s
    }
}

#[inline]
fn occupant_glyph(id: ItemId) -> char {
    char::from(b'a' + (id.0 % 26) as u8)
}
