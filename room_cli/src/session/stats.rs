// room_cli/src/session/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use room_engine::{Command, CommandOutcome, RoomError, RoomView};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct SessionStats {
    pub frames_done: u64,

    // selection lifecycle
    pub adds: u64,
    pub adds_failed: u64,
    pub hold_selects: u64,
    pub placed: u64,
    pub refused: u64,
    pub cancels: u64,
    pub rotations: u64,
    pub destroys: u64,

    // room resizes
    pub resizes: u64,
    pub resizes_gated: u64,
    pub evicted: u64,

    // occupancy aggregates (sampled every frame)
    pub sum_items: f64,
    pub sum_fill: f64,
    pub max_items: usize,

    t0: Instant,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            frames_done: 0,
            adds: 0,
            adds_failed: 0,
            hold_selects: 0,
            placed: 0,
            refused: 0,
            cancels: 0,
            rotations: 0,
            destroys: 0,
            resizes: 0,
            resizes_gated: 0,
            evicted: 0,
            sum_items: 0.0,
            sum_fill: 0.0,
            max_items: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per applied command.
    ///
    /// `was_selected` is the controller state before the command, `room` the state after.
    pub fn on_command(
        &mut self,
        command: &Command,
        result: &Result<CommandOutcome, RoomError>,
        was_selected: bool,
        room: &dyn RoomView,
    ) {
        self.frames_done += 1;

        match (command, result) {
            (Command::AddItem { .. }, Err(err)) => {
                self.adds_failed += 1;
                debug!(error = %err, "add refused");
            }
            (_, Err(err)) => debug!(command = command.name(), error = %err, "command failed"),
            (_, Ok(CommandOutcome::Added(_))) => self.adds += 1,
            (_, Ok(CommandOutcome::Resized { evicted })) => {
                self.resizes += 1;
                self.evicted += evicted.len() as u64;
            }
            (Command::Resize(_), Ok(CommandOutcome::Ignored)) => self.resizes_gated += 1,
            (Command::Confirm, Ok(CommandOutcome::Applied)) => self.placed += 1,
            (Command::Confirm, Ok(CommandOutcome::Ignored)) if was_selected => self.refused += 1,
            (Command::CancelMovement, Ok(CommandOutcome::Applied)) => self.cancels += 1,
            (Command::Rotate, Ok(CommandOutcome::Applied)) => self.rotations += 1,
            (Command::Destroy, Ok(CommandOutcome::Applied)) => self.destroys += 1,
            (Command::Frame { .. }, Ok(_)) if !was_selected && room.selection().is_some() => {
                self.hold_selects += 1;
            }
            _ => {}
        }

        let grid = room.grid();
        let items = grid.occupant_count();
        let area = (grid.width() * grid.height()) as f64;
        self.sum_items += items as f64;
        self.sum_fill += grid.occupied_cells() as f64 / area;
        self.max_items = self.max_items.max(items);
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn frames_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.frames_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_items(&self) -> f64 {
        if self.frames_done > 0 {
            self.sum_items / self.frames_done as f64
        } else {
            0.0
        }
    }

    pub fn avg_fill(&self) -> f64 {
        if self.frames_done > 0 {
            self.sum_fill / self.frames_done as f64
        } else {
            0.0
        }
    }

    pub fn live_msg(&self) -> String {
        format!(
            "fps={:.0} items={:.1} fill={:.2} placed={} refused={} cancels={} evicted={}",
            self.frames_per_sec(),
            self.avg_items(),
            self.avg_fill(),
            self.placed,
            self.refused,
            self.cancels,
            self.evicted,
        )
    }

    pub fn final_report(&self, seed: u64, room: &dyn RoomView) -> FinalReport {
        let grid = room.grid();
        FinalReport {
            seed,
            frames_done: self.frames_done,
            elapsed_s: self.elapsed_secs(),
            frames_per_s: self.frames_per_sec(),
            adds: self.adds,
            adds_failed: self.adds_failed,
            hold_selects: self.hold_selects,
            placed: self.placed,
            refused: self.refused,
            cancels: self.cancels,
            rotations: self.rotations,
            destroys: self.destroys,
            resizes: self.resizes,
            resizes_gated: self.resizes_gated,
            evicted: self.evicted,
            avg_items: self.avg_items(),
            avg_fill: self.avg_fill(),
            max_items: self.max_items,
            final_size: (grid.width(), grid.height()),
            final_items: grid.occupant_count(),
            final_selected: room.selection().is_some(),
        }
    }
}

/// End-of-run summary, printed as one greppable line.
#[derive(Clone, Debug)]
pub struct FinalReport {
    pub seed: u64,
    pub frames_done: u64,
    pub elapsed_s: f64,
    pub frames_per_s: f64,
    pub adds: u64,
    pub adds_failed: u64,
    pub hold_selects: u64,
    pub placed: u64,
    pub refused: u64,
    pub cancels: u64,
    pub rotations: u64,
    pub destroys: u64,
    pub resizes: u64,
    pub resizes_gated: u64,
    pub evicted: u64,
    pub avg_items: f64,
    pub avg_fill: f64,
    pub max_items: usize,
    pub final_size: (u32, u32),
    pub final_items: usize,
    pub final_selected: bool,
}
