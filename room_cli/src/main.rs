// room_cli/src/main.rs
#![forbid(unsafe_code)]

mod session;

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::session::{Runner, RunnerConfig};
use room_engine::{Catalog, RoomConfig};
use room_engine::engine::{DEFAULT_GRID_H, DEFAULT_GRID_W};

#[derive(Parser, Debug)]
#[command(name = "room_cli")]
struct Args {
    // ---------------- session sizing ----------------
    /// Total frames to execute (one decorator command per frame).
    #[arg(long, default_value_t = 2000)]
    frames: u64,

    /// Decorator RNG seed. If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    // ---------------- room ----------------
    /// Initial floor width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_W)]
    width: u32,

    /// Initial floor height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_H)]
    height: u32,

    /// Press-and-hold duration that selects an item, in milliseconds.
    #[arg(long, default_value_t = 300)]
    hold_ms: u64,

    /// TOML furniture catalog (`[[templates]]` with name/width/height). Built-in set if omitted.
    #[arg(long, value_name = "path")]
    catalog: Option<PathBuf>,

    /// Smallest side the decorator requests when resizing the room.
    #[arg(long, default_value_t = 4)]
    min_side: u32,

    /// Largest side the decorator requests when resizing the room.
    #[arg(long, default_value_t = 14)]
    max_side: u32,

    // ---------------- visualization ----------------
    /**
     * Render the floor as ASCII every frame; value is sleep in ms (e.g. 30). Omit to disable.
     * Examples:
     *   --render 0    (render as fast as possible)
     *   --render 30   (sleep 30ms between frames)
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic log.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Log a progress line every N frames (only used with --verbosity 2).
    #[arg(long, default_value_t = 500)]
    report_every: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(err) = run(args) {
        error!(error = %err, "session_failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, String> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let src = std::fs::read_to_string(path)
        .map_err(|error| format!("read catalog '{}': {error}", path.display()))?;
    let catalog = Catalog::from_toml_str(&src)
        .map_err(|error| format!("load catalog '{}': {error}", path.display()))?;
    if catalog.is_empty() {
        return Err(format!("catalog '{}' has no templates", path.display()));
    }
    Ok(catalog)
}

fn run(args: Args) -> Result<(), String> {
    let seed = args.seed.unwrap_or(12345);
    let catalog = load_catalog(args.catalog.as_ref())?;

    let room = RoomConfig {
        grid_width: args.width,
        grid_height: args.height,
        hold_to_select_secs: args.hold_ms as f32 / 1000.0,
    };
    room.validate().map_err(|error| format!("room config: {error}"))?;

    // Session configuration (data only; no logic).
    let cfg = RunnerConfig {
        frames: args.frames,
        seed,
        room,
        catalog,
        min_side: args.min_side,
        max_side: args.max_side,
        verbosity: args.verbosity,
        report_every: args.report_every,
        render_ms: args.render,
    };

    let report = Runner::new(cfg)
        .run()
        .map_err(|error| format!("session: {error}"))?;

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: seed={} frames={} elapsed={:.3}s frames/s={:.1} adds={} adds_failed={} hold_selects={} placed={} refused={} cancels={} rotations={} destroys={} resizes={} resizes_gated={} evicted={} avg_items={:.2} avg_fill={:.3} max_items={} final_size={}x{} final_items={} final_selected={}",
        report.seed,
        report.frames_done,
        report.elapsed_s,
        report.frames_per_s,
        report.adds,
        report.adds_failed,
        report.hold_selects,
        report.placed,
        report.refused,
        report.cancels,
        report.rotations,
        report.destroys,
        report.resizes,
        report.resizes_gated,
        report.evicted,
        report.avg_items,
        report.avg_fill,
        report.max_items,
        report.final_size.0,
        report.final_size.1,
        report.final_items,
        report.final_selected,
    );
    Ok(())
}
