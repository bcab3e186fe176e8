// engine/src/decorator/script.rs
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use crate::engine::{Command, PointerSignal, RoomView};

use super::base::Decorator;

/// Replays a fixed command list, then idles with empty frames.
pub struct ScriptDecorator {
    queue: VecDeque<Command>,
    idle_dt: f32,
}

impl ScriptDecorator {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            queue: commands.into_iter().collect(),
            idle_dt: 1.0 / 60.0,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Decorator for ScriptDecorator {
    fn next_command(&mut self, _room: &dyn RoomView) -> Command {
        self.queue.pop_front().unwrap_or(Command::Frame {
            dt: self.idle_dt,
            pointer: PointerSignal::None,
        })
    }
}
