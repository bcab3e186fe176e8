// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod decorator;
pub mod engine;

// Flat re-exports for hosts and the CLI:
pub use decorator::{Decorator, RandomDecorator, ScriptDecorator};
pub use engine::{
    Affordance, Catalog, Cell, Command, CommandOutcome, ContextActions, FloorTransform, Footprint,
    FurnitureTemplate, HeadlessActions, HeadlessScene, ItemId, ItemTransform, OccupancyGrid,
    Orientation, PlaceOutcome, PlacedItem, PlacementController, PlacementError, PointerSignal,
    PointerSource, ResizeOutcome, ResizeRequest, RoomConfig, RoomError, RoomView, SavedPlacement,
    SceneEvent, Selection, VisualFactory,
};

/// Controller wired to the in-memory collaborators.
pub type HeadlessController = PlacementController<HeadlessScene, HeadlessActions>;
