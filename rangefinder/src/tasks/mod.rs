//! The three periodic tasks of the gauge.
//!
//! Every task is split in two:
//! - `cycle` does one period's work and returns what happened
//! - `run` calls `cycle` forever, once every period
//!
//! The firmware spawns `run`, the tests call `cycle`.

mod display;
mod input;
mod sense;

#[cfg(test)]
mod mock;

pub use display::{DisplayEvent, DisplayTask};
pub use input::{InputEvent, InputTask};
pub use sense::{SenseEvent, SenseTask};
