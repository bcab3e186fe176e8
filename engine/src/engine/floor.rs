// engine/src/engine/floor.rs
#![forbid(unsafe_code)]

/// Pose of the external floor mesh: centre on the floor plane and per-axis scale.
///
/// The mesh is a unit quad centred on `position`, so a `w x h` floor whose cell (0, 0)
/// sits at the world origin has its centre at `(w/2, h/2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorTransform {
    pub position: (f32, f32),
    pub scale: (f32, f32),
}

impl FloorTransform {
    pub fn for_grid(width: u32, height: u32) -> Self {
        Self {
            position: (width as f32 / 2.0, height as f32 / 2.0),
            scale: (width as f32, height as f32),
        }
    }

    /// Transform after the floor changes from `old` to `new` cells.
    ///
    /// The centre moves by half of each axis' delta, which keeps cell (0, 0) where it was:
    /// resizing migrates occupants by coordinate, so the origin corner must not move.
    /// The visual centre of the floor therefore shifts on resize; keeping the centre fixed
    /// instead would slide every kept item relative to its cells.
    pub fn resized(&self, old: (u32, u32), new: (u32, u32)) -> Self {
        let dx = new.0 as f32 - old.0 as f32;
        let dy = new.1 as f32 - old.1 as f32;
        Self {
            position: (self.position.0 + dx / 2.0, self.position.1 + dy / 2.0),
            scale: (new.0 as f32, new.1 as f32),
        }
    }
}
