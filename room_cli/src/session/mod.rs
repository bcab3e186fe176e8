// room_cli/src/session/mod.rs
#![forbid(unsafe_code)]

pub mod runner;
pub mod stats;

pub use runner::{Runner, RunnerConfig};
