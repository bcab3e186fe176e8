// engine/src/engine/collaborators.rs
#![forbid(unsafe_code)]

/*
 * Seams between the placement core and its host.
 *
 * The core never touches engine objects: visuals are addressed by `ItemId`, input arrives
 * as already-resolved grid cells, and UI is a single visibility toggle.
 */
use crate::engine::catalog::FurnitureTemplate;
use crate::engine::floor::FloorTransform;
use crate::engine::footprint::Cell;
use crate::engine::item::{ItemId, ItemTransform};

/// One frame of pointer/touch input, already mapped onto the floor grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerSignal {
    #[default]
    None,
    /// Press began or moved over `cell`.
    Drag { cell: Cell },
    /// Press rests on `cell` this frame; duration is accumulated by the controller.
    Hold { cell: Cell },
}

pub trait PointerSource {
    fn poll(&mut self) -> PointerSignal;
}

impl<F> PointerSource for F
where
    F: FnMut() -> PointerSignal,
{
    fn poll(&mut self) -> PointerSignal {
        self()
    }
}

/// Selection outline state: `valid` picks the "can place" colour over the "blocked" one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Affordance {
    pub visible: bool,
    pub valid: bool,
}

impl Affordance {
    pub const HIDDEN: Affordance = Affordance {
        visible: false,
        valid: true,
    };

    #[inline]
    pub fn selected(valid: bool) -> Self {
        Self {
            visible: true,
            valid,
        }
    }
}

/// Owner of the visual objects.
pub trait VisualFactory {
    fn instantiate(&mut self, template: &FurnitureTemplate) -> ItemId;
    fn destroy(&mut self, id: ItemId);
    fn set_transform(&mut self, id: ItemId, transform: ItemTransform);
    fn set_selection_affordance(&mut self, id: ItemId, affordance: Affordance);
    /// Called after a room resize with the corrected floor pose.
    fn set_floor_transform(&mut self, floor: FloorTransform);
}

/// Context action controls (rotate / delete / confirm buttons) shown while an item is selected.
pub trait ContextActions {
    fn set_visible(&mut self, visible: bool);
}

/// Room resize request coming from the size-changer widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResizeRequest {
    /// The widget gates resizing; an unavailable request is ignored.
    pub available: bool,
    pub width: u32,
    pub height: u32,
}

impl ResizeRequest {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            available: true,
            width,
            height,
        }
    }

    pub fn unavailable(width: u32, height: u32) -> Self {
        Self {
            available: false,
            width,
            height,
        }
    }
}
