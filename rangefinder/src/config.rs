//! Timing and thresholds of the gauge.
//!
//! These values are fixed at compile time.

use embassy_time::Duration;

/// The time between two measurements
pub const SENSE_PERIOD: Duration = Duration::from_millis(1000);

/// The time between two display refreshes
pub const DISPLAY_PERIOD: Duration = Duration::from_millis(1000);

/// The time between two key polls.
///
/// It is shorter than the measurement period so that a short press
/// is not missed.
pub const INPUT_PERIOD: Duration = Duration::from_millis(200);

/// The lower bounds of the bands above the first one, in centimeters.
///
/// A distance that is exactly on a bound belongs to the upper band.
pub const BAND_BOUNDS_CM: [u16; 3] = [10, 20, 30];

/// The largest value the display shows, larger values saturate
pub const DISPLAY_MAX_CM: u16 = 999;
