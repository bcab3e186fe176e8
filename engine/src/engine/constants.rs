// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

/// Floor size used when no configuration overrides it.
pub const DEFAULT_GRID_W: u32 = 10;
pub const DEFAULT_GRID_H: u32 = 10;

/// Seconds a stationary press must rest on an item before it gets selected.
pub const HOLD_TO_SELECT_SECS: f32 = 0.3;

/// One rotation step of the visual transform.
pub const ROTATION_STEP_DEG: f32 = 90.0;

/// Number of distinct orientations (0°, 90°, 180°, 270°).
pub const QUARTER_TURNS: u8 = 4;

/// Glyph for an empty cell in ASCII renders.
pub const EMPTY_GLYPH: char = '.';
