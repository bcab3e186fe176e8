// engine/src/engine/command.rs
#![forbid(unsafe_code)]

use crate::engine::collaborators::{PointerSignal, ResizeRequest};
use crate::engine::footprint::Cell;
use crate::engine::item::ItemId;

/// One scripted controller input. `PlacementController::apply` dispatches these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Per-frame evaluation with `dt` seconds elapsed.
    Frame { dt: f32, pointer: PointerSignal },
    /// Add a new item from the catalog entry at `template`.
    AddItem { template: usize },
    Select(ItemId),
    MoveTo(Cell),
    Rotate,
    /// Same path as "deselect by tapping away".
    Confirm,
    CancelMovement,
    Destroy,
    Resize(ResizeRequest),
}

impl Command {
    /// Short stable name, used for stats keys and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Frame { .. } => "frame",
            Command::AddItem { .. } => "add",
            Command::Select(_) => "select",
            Command::MoveTo(_) => "move",
            Command::Rotate => "rotate",
            Command::Confirm => "confirm",
            Command::CancelMovement => "cancel",
            Command::Destroy => "destroy",
            Command::Resize(_) => "resize",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandOutcome {
    Applied,
    /// The command needed state that was not there (no selection, unknown id, gated resize...).
    Ignored,
    Added(ItemId),
    Resized { evicted: Vec<ItemId> },
}
