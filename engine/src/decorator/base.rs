// engine/src/decorator/base.rs
#![forbid(unsafe_code)]

use crate::engine::{Command, RoomView};

/// Chooses the next controller input for the current room state.
///
/// Object-safe so it can be used as `Box<dyn Decorator>`.
pub trait Decorator {
    fn next_command(&mut self, room: &dyn RoomView) -> Command;
}
