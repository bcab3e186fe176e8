// engine/src/engine/error.rs
#![forbid(unsafe_code)]

use crate::engine::footprint::{Cell, Footprint};
use crate::engine::item::ItemId;

/// Why a candidate rectangle cannot be committed.
///
/// Recoverable by construction: callers surface it as the "available" flag of the
/// selection affordance, never as a failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("{footprint} item at {anchor} leaves the {width}x{height} floor")]
    OutOfBounds {
        anchor: Cell,
        footprint: Footprint,
        width: u32,
        height: u32,
    },
    #[error("cell {cell} is occupied by item {by}")]
    Occupied { cell: Cell, by: ItemId },
}

#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("floor dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("hold-to-select duration must be a finite, non-negative number of seconds, got {0}")]
    InvalidHoldDuration(f32),

    #[error("no free spot for a {footprint} item on the {width}x{height} floor")]
    NoFreeAnchor {
        footprint: Footprint,
        width: u32,
        height: u32,
    },

    #[error("template {name:?} has an empty footprint {footprint}")]
    InvalidTemplate { name: String, footprint: Footprint },

    #[error("catalog parse error: {0}")]
    Catalog(#[from] toml::de::Error),
}
