// engine/src/engine/controller.rs
#![forbid(unsafe_code)]

use tracing::{debug, trace, warn};

use crate::engine::catalog::{Catalog, FurnitureTemplate};
use crate::engine::collaborators::{
    Affordance, ContextActions, PointerSignal, PointerSource, ResizeRequest, VisualFactory,
};
use crate::engine::command::{Command, CommandOutcome};
use crate::engine::config::RoomConfig;
use crate::engine::error::RoomError;
use crate::engine::floor::FloorTransform;
use crate::engine::footprint::Cell;
use crate::engine::grid::{OccupancyGrid, PlaceOutcome};
use crate::engine::item::{ItemId, PlacedItem, SavedPlacement};

/// The active item plus the pose it returns to on cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    item: PlacedItem,
    saved: SavedPlacement,
}

impl Selection {
    #[inline]
    pub fn item(&self) -> &PlacedItem {
        &self.item
    }

    #[inline]
    pub fn saved(&self) -> &SavedPlacement {
        &self.saved
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResizeOutcome {
    /// The size changer reported resizing as unavailable; nothing changed.
    Unavailable,
    Resized {
        /// Items destroyed because they no longer fit, in eviction order.
        evicted: Vec<ItemId>,
        floor: FloorTransform,
    },
}

/// Read-only view of a room, object safe so drivers can take `&dyn RoomView`.
pub trait RoomView {
    fn grid(&self) -> &OccupancyGrid;
    fn selection(&self) -> Option<&Selection>;
    fn catalog(&self) -> &Catalog;
}

/// Selection state machine over an occupancy grid.
///
/// States:
/// - Idle: `selection == None`; every item lives in the grid.
/// - Selected: exactly one item lives in `selection` and is absent from the grid, so it
///   never blocks its own moves.
///
/// All mutation happens synchronously from the host's frame loop (`tick`) or from explicit
/// UI actions; nothing blocks and nothing is shared.
#[derive(Clone)]
pub struct PlacementController<V, U> {
    grid: OccupancyGrid,
    selection: Option<Selection>,
    /// Countdown for hold-to-select, seconds. Runs for `held` only.
    hold_remaining: f32,
    held: Option<ItemId>,
    floor: FloorTransform,
    config: RoomConfig,
    catalog: Catalog,
    visuals: V,
    actions: U,
}

impl<V: VisualFactory, U: ContextActions> PlacementController<V, U> {
    pub fn new(
        config: RoomConfig,
        catalog: Catalog,
        mut visuals: V,
        mut actions: U,
    ) -> Result<Self, RoomError> {
        config.validate()?;
        let grid = OccupancyGrid::new(config.grid_width, config.grid_height)?;
        let floor = FloorTransform::for_grid(config.grid_width, config.grid_height);

        visuals.set_floor_transform(floor);
        actions.set_visible(false);

        Ok(Self {
            grid,
            selection: None,
            hold_remaining: config.hold_to_select_secs,
            held: None,
            floor,
            config,
            catalog,
            visuals,
            actions,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selection.is_some()
    }

    #[inline]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selection.as_ref().map(|s| s.item.id)
    }

    pub fn floor(&self) -> FloorTransform {
        self.floor
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn visuals(&self) -> &V {
        &self.visuals
    }

    pub fn visuals_mut(&mut self) -> &mut V {
        &mut self.visuals
    }

    pub fn context_actions(&self) -> &U {
        &self.actions
    }

    /// Availability of the selected item at its current tentative anchor.
    pub fn selection_available(&self) -> Option<bool> {
        self.selection
            .as_ref()
            .map(|s| self.grid.is_free(s.item.anchor, s.item.footprint))
    }

    // -------------------------------------------------------------------------
    // Selection transitions
    // -------------------------------------------------------------------------

    fn enter_selection(&mut self, item: PlacedItem) {
        let valid = self.grid.is_free(item.anchor, item.footprint);
        self.visuals
            .set_selection_affordance(item.id, Affordance::selected(valid));
        self.actions.set_visible(true);
        self.held = None;
        self.hold_remaining = self.config.hold_to_select_secs;
        self.selection = Some(Selection {
            saved: SavedPlacement::of(&item),
            item,
        });
    }

    fn leave_selection(&mut self, id: ItemId) {
        self.visuals.set_selection_affordance(id, Affordance::HIDDEN);
        self.actions.set_visible(false);
    }

    /// Adds a new item from `template` and selects it.
    ///
    /// A previous selection is settled first: committed where it stands if that spot is
    /// free, otherwise reverted to its saved placement. The new item goes to the first free
    /// anchor in row-major order; nothing is created when no anchor fits.
    pub fn add_item(&mut self, template: &FurnitureTemplate) -> Result<ItemId, RoomError> {
        let footprint = template.footprint;
        if !footprint.is_valid() {
            return Err(RoomError::InvalidTemplate {
                name: template.name.clone(),
                footprint,
            });
        }

        if self.selection.is_some() && !self.confirm() {
            self.cancel_movement();
        }

        let anchor =
            self.grid
                .first_free_anchor(footprint)
                .ok_or(RoomError::NoFreeAnchor {
                    footprint,
                    width: self.grid.width(),
                    height: self.grid.height(),
                })?;

        let id = self.visuals.instantiate(template);
        let item = PlacedItem::new(id, footprint, anchor);
        self.visuals.set_transform(id, item.transform());
        debug!(item = %id, template = %template.name, %anchor, "item added");

        self.enter_selection(item);
        Ok(id)
    }

    /// Idle -> Selected for a committed item. Lifts it out of the grid.
    ///
    /// Returns `false` (no-op) when something is already selected or `id` is not on the floor.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.selection.is_some() {
            return false;
        }
        let Some(item) = self.grid.remove(id) else {
            return false;
        };
        debug!(item = %id, anchor = %item.anchor, "item selected");
        self.enter_selection(item);
        true
    }

    /// Moves the selected item's tentative anchor. Never writes the grid.
    ///
    /// The anchor follows the candidate even when it is not free so dragging stays
    /// continuous; the return value (and the affordance colour) tells whether it is.
    pub fn move_to(&mut self, candidate: Cell) -> bool {
        let Some(sel) = self.selection.as_mut() else {
            return false;
        };
        sel.item.anchor = candidate;
        let id = sel.item.id;
        let available = self.grid.is_free(candidate, sel.item.footprint);
        self.visuals.set_transform(id, sel.item.transform());
        self.visuals
            .set_selection_affordance(id, Affordance::selected(available));
        trace!(item = %id, %candidate, available, "move");
        available
    }

    /// Selected -> Idle, committing the item at its current anchor.
    ///
    /// If that anchor is not free this is a no-op and the item stays selected. Returns
    /// whether the item was committed.
    pub fn confirm(&mut self) -> bool {
        let Some(sel) = self.selection.take() else {
            return false;
        };
        let id = sel.item.id;
        match self.grid.try_place(sel.item) {
            PlaceOutcome::Placed => {
                self.leave_selection(id);
                debug!(item = %id, anchor = %sel.item.anchor, "item placed");
                true
            }
            PlaceOutcome::Rejected { item, reason } => {
                debug!(item = %id, %reason, "placement refused; still selected");
                self.selection = Some(Selection {
                    item,
                    saved: sel.saved,
                });
                false
            }
        }
    }

    /// Deselect by tapping away. Same rules as `confirm`.
    #[inline]
    pub fn cancel_selection(&mut self) -> bool {
        self.confirm()
    }

    /// Selected -> Idle, putting the item back exactly where it was selected from
    /// (anchor, footprint and heading).
    ///
    /// Always leaves Selected. The saved placement was valid when recorded and resize evicts
    /// a selection whose saved placement no longer fits, so the commit cannot be refused; if
    /// it ever is, the item is destroyed rather than left floating.
    pub fn cancel_movement(&mut self) -> bool {
        let Some(mut sel) = self.selection.take() else {
            return false;
        };
        let id = sel.item.id;
        sel.saved.restore(&mut sel.item);
        self.visuals.set_transform(id, sel.item.transform());

        match self.grid.try_place(sel.item) {
            PlaceOutcome::Placed => {
                self.leave_selection(id);
                debug!(item = %id, anchor = %sel.saved.anchor, "movement cancelled");
            }
            PlaceOutcome::Rejected { reason, .. } => {
                warn!(item = %id, %reason, "saved placement refused; destroying item");
                self.visuals.destroy(id);
                self.actions.set_visible(false);
            }
        }
        true
    }

    /// Quarter turn of the selected item about its anchor. Validity is re-evaluated on the
    /// next move / tick / confirm.
    pub fn rotate(&mut self) -> bool {
        let Some(sel) = self.selection.as_mut() else {
            return false;
        };
        sel.item.rotate();
        self.visuals.set_transform(sel.item.id, sel.item.transform());
        trace!(item = %sel.item.id, footprint = %sel.item.footprint, "rotate");
        true
    }

    /// Selected -> Idle, dropping the selected item. It is already absent from the grid.
    pub fn destroy(&mut self) -> Option<ItemId> {
        let sel = self.selection.take()?;
        let id = sel.item.id;
        self.visuals.destroy(id);
        self.actions.set_visible(false);
        debug!(item = %id, "item destroyed");
        Some(id)
    }

    // -------------------------------------------------------------------------
    // Room resize
    // -------------------------------------------------------------------------

    /// Resizes the floor to `request.width x request.height`.
    ///
    /// Protocol:
    /// 1. evict and destroy every committed item that would not fit, plus the selection if
    ///    its saved placement would not fit;
    /// 2. copy the remaining table by coordinate;
    /// 3. swap in the new grid;
    /// 4. push the corrected floor pose to the visual collaborator.
    pub fn resize_room(&mut self, request: ResizeRequest) -> Result<ResizeOutcome, RoomError> {
        if !request.available {
            return Ok(ResizeOutcome::Unavailable);
        }
        let (width, height) = (request.width, request.height);
        if width == 0 || height == 0 {
            return Err(RoomError::InvalidDimensions { width, height });
        }

        let old = (self.grid.width(), self.grid.height());
        let mut evicted = Vec::new();

        for id in self.grid.occupants_outside(width, height) {
            if self.grid.remove(id).is_some() {
                self.visuals.destroy(id);
                evicted.push(id);
            }
        }

        let selection_fits = self
            .selection
            .as_ref()
            .is_none_or(|s| s.saved.footprint.fits_within(s.saved.anchor, width, height));
        if !selection_fits {
            if let Some(id) = self.destroy() {
                evicted.push(id);
            }
        }

        self.grid.resize(width, height)?;
        self.floor = self.floor.resized(old, (width, height));
        self.visuals.set_floor_transform(self.floor);

        debug!(
            from = ?old,
            to = ?(width, height),
            evicted = evicted.len(),
            "room resized"
        );
        Ok(ResizeOutcome::Resized {
            evicted,
            floor: self.floor,
        })
    }

    // -------------------------------------------------------------------------
    // Frame loop
    // -------------------------------------------------------------------------

    /// Per-frame evaluation.
    ///
    /// Selected: refresh the affordance colour at the current anchor, then follow a drag
    /// as long as the item's rectangle stays on the floor.
    /// Idle: count down while a press rests on one item; select it when the hold completes.
    /// A frame without such a press, or with the press over a different item, restarts the
    /// countdown.
    pub fn tick(&mut self, dt: f32, pointer: PointerSignal) {
        if let Some(sel) = self.selection.as_ref() {
            let item = sel.item;
            let available = self.grid.is_free(item.anchor, item.footprint);
            self.visuals
                .set_selection_affordance(item.id, Affordance::selected(available));

            if let PointerSignal::Drag { cell } = pointer {
                if self.grid.contains(cell, item.footprint) {
                    self.move_to(cell);
                }
            }
            return;
        }

        let held = match pointer {
            PointerSignal::Hold { cell } => self.grid.occupant_at(cell),
            _ => None,
        };
        if held != self.held {
            self.held = held;
            self.hold_remaining = self.config.hold_to_select_secs;
        }
        let Some(id) = held else {
            return;
        };

        self.hold_remaining -= dt;
        if self.hold_remaining <= 0.0 {
            self.select(id);
        }
    }

    /// `tick` with input pulled from `source`.
    pub fn run_frame(&mut self, dt: f32, source: &mut dyn PointerSource) {
        let pointer = source.poll();
        self.tick(dt, pointer);
    }

    /// Dispatches one scripted command.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, RoomError> {
        let flag = |applied: bool| {
            if applied {
                CommandOutcome::Applied
            } else {
                CommandOutcome::Ignored
            }
        };

        match command {
            Command::Frame { dt, pointer } => {
                self.tick(dt, pointer);
                Ok(CommandOutcome::Applied)
            }
            Command::AddItem { template } => {
                let Some(template) = self.catalog.get(template).cloned() else {
                    return Ok(CommandOutcome::Ignored);
                };
                self.add_item(&template).map(CommandOutcome::Added)
            }
            Command::Select(id) => Ok(flag(self.select(id))),
            Command::MoveTo(cell) => {
                let selected = self.selection.is_some();
                self.move_to(cell);
                Ok(flag(selected))
            }
            Command::Rotate => Ok(flag(self.rotate())),
            Command::Confirm => Ok(flag(self.confirm())),
            Command::CancelMovement => Ok(flag(self.cancel_movement())),
            Command::Destroy => Ok(flag(self.destroy().is_some())),
            Command::Resize(request) => Ok(match self.resize_room(request)? {
                ResizeOutcome::Unavailable => CommandOutcome::Ignored,
                ResizeOutcome::Resized { evicted, .. } => CommandOutcome::Resized { evicted },
            }),
        }
    }

    /// Floor with the selected item drawn on top, plus a status line.
    pub fn render_ascii(&self) -> String {
        let overlay = self.selection.as_ref().map(|s| &s.item);
        let mut s = self.grid.render_with_overlay(overlay);
        let selected = match &self.selection {
            Some(sel) => format!(
                "{}@{} {} valid={}",
                sel.item.id,
                sel.item.anchor,
                sel.item.footprint,
                self.grid.is_free(sel.item.anchor, sel.item.footprint)
            ),
            None => "none".to_string(),
        };
        s.push_str(&format!(
            "floor={}x{} items={} occupied={} selected={}\n",
            self.grid.width(),
            self.grid.height(),
            self.grid.occupant_count(),
            self.grid.occupied_cells(),
            selected
        ));
        s
    }
}

impl<V, U> RoomView for PlacementController<V, U> {
    #[inline]
    fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    #[inline]
    fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[inline]
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
