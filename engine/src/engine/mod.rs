// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod catalog;
mod collaborators;
mod command;
mod config;
mod constants;
mod controller;
mod error;
mod floor;
mod footprint;
mod grid;
mod item;
mod scene;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use catalog::{Catalog, FurnitureTemplate};
pub use collaborators::{
    Affordance, ContextActions, PointerSignal, PointerSource, ResizeRequest, VisualFactory,
};
pub use command::{Command, CommandOutcome};
pub use config::RoomConfig;
pub use constants::{
    DEFAULT_GRID_H, DEFAULT_GRID_W, EMPTY_GLYPH, HOLD_TO_SELECT_SECS, QUARTER_TURNS,
    ROTATION_STEP_DEG,
};
pub use controller::{PlacementController, ResizeOutcome, RoomView, Selection};
pub use error::{PlacementError, RoomError};
pub use floor::FloorTransform;
pub use footprint::{Cell, Footprint, Orientation};
pub use grid::{OccupancyGrid, PlaceOutcome};
pub use item::{ItemId, ItemTransform, PlacedItem, SavedPlacement};
pub use scene::{HeadlessActions, HeadlessScene, SceneEvent, VisualState};
