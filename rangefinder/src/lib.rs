//! The distance gauge: three periodic tasks that share a measurement.
//!
//! - the sense task reads the distance and shows its band on three LEDs
//! - the display task shows the distance on the LCD
//! - the input task reads two keys that start/stop the measurement and
//!   hold the display
//!
//! The tasks only talk to each other through a [`MeasurementState`].
//! Every field of the state is a separate atomic value, so a task may
//! read a value that is one period old but never a half written one.

#![cfg_attr(not(test), no_std)]

// This module must come first, it defines the logging macros
mod fmt;

pub mod collaborators;
pub mod config;
pub mod gauge;
pub mod state;
pub mod tasks;

pub use gauge::{Band, IndicatorPattern};
pub use state::{MeasurementState, Snapshot};
