// engine/src/decorator/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::{
    Cell, Command, ItemId, OccupancyGrid, PointerSignal, ResizeRequest, RoomView,
};

use super::base::Decorator;

/// Seeded random user: drags and confirms while something is selected, otherwise adds
/// items, press-and-holds existing ones, and now and then resizes the room.
///
/// Drag and move targets spill a little past the floor edges so rejections get exercised.
pub struct RandomDecorator {
    rng: StdRng,
    dt: f32,
    min_side: u32,
    max_side: u32,
    /// Cell being press-and-held until the controller picks the item up.
    hold: Option<Cell>,
}

impl RandomDecorator {
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dt: Self::DEFAULT_DT,
            min_side: 4,
            max_side: 14,
            hold: None,
        }
    }

    /// Bounds (inclusive) for the sides of requested room sizes.
    pub fn with_resize_range(mut self, min_side: u32, max_side: u32) -> Self {
        self.min_side = min_side.max(1);
        self.max_side = max_side.max(self.min_side);
        self
    }

    pub fn with_frame_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    fn frame(&self, pointer: PointerSignal) -> Command {
        Command::Frame {
            dt: self.dt,
            pointer,
        }
    }

    fn random_cell(&mut self, grid: &OccupancyGrid, margin: i32) -> Cell {
        let x = self.rng.random_range(-margin..grid.width() as i32 + margin);
        let y = self.rng.random_range(-margin..grid.height() as i32 + margin);
        Cell::new(x, y)
    }

    /// Some cell covered by a committed item, if any.
    fn random_occupied_cell(&mut self, grid: &OccupancyGrid) -> Option<Cell> {
        let mut ids: Vec<ItemId> = grid.occupants().map(|item| item.id).collect();
        ids.sort_unstable();
        let &id = ids.choose(&mut self.rng)?;
        let item = grid.occupant(id)?;
        let dx = self.rng.random_range(0..item.footprint.width) as i32;
        let dy = self.rng.random_range(0..item.footprint.height) as i32;
        Some(item.anchor.offset(dx, dy))
    }

    fn random_side(&mut self) -> u32 {
        self.rng.random_range(self.min_side..=self.max_side)
    }
}

impl Decorator for RandomDecorator {
    fn next_command(&mut self, room: &dyn RoomView) -> Command {
        let grid = room.grid();

        if room.selection().is_some() {
            self.hold = None;
            return match self.rng.random_range(0..100u32) {
                0..55 => {
                    let cell = self.random_cell(grid, 1);
                    self.frame(PointerSignal::Drag { cell })
                }
                55..65 => Command::Rotate,
                65..80 => Command::Confirm,
                80..90 => Command::CancelMovement,
                90..94 => Command::Destroy,
                _ => Command::MoveTo(self.random_cell(grid, 2)),
            };
        }

        if let Some(cell) = self.hold {
            if grid.occupant_at(cell).is_some() {
                return self.frame(PointerSignal::Hold { cell });
            }
            self.hold = None;
        }

        match self.rng.random_range(0..100u32) {
            0..20 if !room.catalog().is_empty() => Command::AddItem {
                template: self.rng.random_range(0..room.catalog().len()),
            },
            20..45 => match self.random_occupied_cell(grid) {
                Some(cell) => {
                    self.hold = Some(cell);
                    self.frame(PointerSignal::Hold { cell })
                }
                None => self.frame(PointerSignal::None),
            },
            45..48 => {
                let (w, h) = (self.random_side(), self.random_side());
                Command::Resize(ResizeRequest::new(w, h))
            }
            48..50 => {
                let (w, h) = (self.random_side(), self.random_side());
                Command::Resize(ResizeRequest::unavailable(w, h))
            }
            _ => self.frame(PointerSignal::None),
        }
    }
}
