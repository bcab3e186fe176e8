// room_cli/src/session/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use room_engine::{
    Catalog, Decorator, HeadlessActions, HeadlessController, HeadlessScene, RandomDecorator,
    RoomConfig, RoomError, RoomView,
};

use super::stats::{FinalReport, SessionStats};

/// Fixed internal cadence for progress-bar live message updates.
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core session ----------------
    /// Total commands (frames) to execute.
    pub frames: u64,
    /// Seed for the random decorator.
    pub seed: u64,
    pub room: RoomConfig,
    pub catalog: Catalog,

    /// Inclusive side bounds for random resize requests.
    pub min_side: u32,
    pub max_side: u32,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic log line
    pub verbosity: u8,

    /// Log a summary line every N frames (only used when verbosity == 2). 0 disables it.
    pub report_every: u64,

    // ---------------- rendering ----------------
    /// If Some(ms): render every frame; sleep ms between frames (0 = no sleep).
    pub render_ms: Option<u64>,
}

pub struct Runner {
    cfg: RunnerConfig,
}

impl Runner {
    pub fn new(cfg: RunnerConfig) -> Self {
        Self { cfg }
    }

    pub fn run(&mut self) -> Result<FinalReport, RoomError> {
        let cfg = self.cfg.clone();

        let pb = (cfg.verbosity >= 1).then(|| {
            let pb = ProgressBar::new(cfg.frames);
            let style = ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
            )
            .map(|s| s.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(style);
            pb
        });

        let mut room: HeadlessController = HeadlessController::new(
            cfg.room,
            cfg.catalog.clone(),
            HeadlessScene::without_event_log(),
            HeadlessActions::default(),
        )?;
        let mut decorator =
            RandomDecorator::new(cfg.seed).with_resize_range(cfg.min_side, cfg.max_side);
        let mut stats = SessionStats::new();

        if cfg.render_ms.is_some() {
            print!("{}", room.render_ascii());
        }

        while stats.frames_done < cfg.frames {
            let was_selected = room.is_selected();
            let command = decorator.next_command(&room);
            let result = room.apply(command);
            stats.on_command(&command, &result, was_selected, &room);

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            if let Some(ms) = cfg.render_ms {
                println!("frame={} command={:?}", stats.frames_done, command);
                print!("{}", room.render_ascii());
                if ms > 0 {
                    std::thread::sleep(Duration::from_millis(ms));
                }
            }

            if cfg.verbosity == 2
                && cfg.report_every > 0
                && stats.frames_done % cfg.report_every == 0
            {
                info!(
                    frame = stats.frames_done,
                    items = room.grid().occupant_count(),
                    placed = stats.placed,
                    refused = stats.refused,
                    evicted = stats.evicted,
                    "session progress"
                );
            }

            if cfg.verbosity >= 1 && stats.frames_done % LIVE_EVERY == 0 {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg());
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(stats.final_report(cfg.seed, &room))
    }
}
