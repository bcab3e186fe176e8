// engine/src/decorator/mod.rs
#![forbid(unsafe_code)]

mod base;
mod random;
mod script;

/**
 * Curated decorator public API.
 *
 * Decorators are scripted drivers: they look at a room and emit the next controller command.
 */
pub use base::Decorator;
pub use random::RandomDecorator;
pub use script::ScriptDecorator;
