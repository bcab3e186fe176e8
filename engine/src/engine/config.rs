// engine/src/engine/config.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{DEFAULT_GRID_H, DEFAULT_GRID_W, HOLD_TO_SELECT_SECS};
use crate::engine::error::RoomError;

/// Controller settings. Plain data; the CLI maps its flags onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// Stationary-press duration that selects an item.
    pub hold_to_select_secs: f32,
}

impl RoomConfig {
    pub fn with_size(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), RoomError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(RoomError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.hold_to_select_secs.is_finite() || self.hold_to_select_secs < 0.0 {
            return Err(RoomError::InvalidHoldDuration(self.hold_to_select_secs));
        }
        Ok(())
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_W,
            grid_height: DEFAULT_GRID_H,
            hold_to_select_secs: HOLD_TO_SELECT_SECS,
        }
    }
}
