//! The state shared by the three tasks.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

/// The measurement state shared by the tasks.
///
/// Each field has a single writer:
/// - `last_distance` is written by the sense task
/// - `measuring_enabled` and `hold_enabled` are toggled by the input task
///
/// Every field is read and written as one atomic value. No operation
/// spans two fields, so `Relaxed` ordering is enough: a reader sees a
/// write at the latest on its next cycle.
pub struct MeasurementState {
    /// The last measured distance in centimeters
    last_distance: AtomicU16,

    /// The sense and display tasks run only while this is `true`
    measuring_enabled: AtomicBool,

    /// The display keeps its value while this is `true`
    hold_enabled: AtomicBool,
}

/// A copy of the three fields, used for logging.
///
/// The fields are read one after the other, so they might come from
/// different moments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub last_distance: u16,
    pub measuring_enabled: bool,
    pub hold_enabled: bool,
}

impl MeasurementState {
    /// Measurement stopped, no hold and a distance of 0.
    ///
    /// This is a `const fn` so that the state can be a `static`.
    pub const fn new() -> Self {
        MeasurementState {
            last_distance: AtomicU16::new(0),
            measuring_enabled: AtomicBool::new(false),
            hold_enabled: AtomicBool::new(false),
        }
    }

    pub fn last_distance(&self) -> u16 {
        self.last_distance.load(Ordering::Relaxed)
    }

    pub fn set_last_distance(&self, distance_cm: u16) {
        self.last_distance.store(distance_cm, Ordering::Relaxed);
    }

    pub fn measuring_enabled(&self) -> bool {
        self.measuring_enabled.load(Ordering::Relaxed)
    }

    /// Starts or stops the measurement and returns the new value.
    pub fn toggle_measuring(&self) -> bool {
        !self.measuring_enabled.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn hold_enabled(&self) -> bool {
        self.hold_enabled.load(Ordering::Relaxed)
    }

    /// Holds or releases the display and returns the new value.
    pub fn toggle_hold(&self) -> bool {
        !self.hold_enabled.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            last_distance: self.last_distance(),
            measuring_enabled: self.measuring_enabled(),
            hold_enabled: self.hold_enabled(),
        }
    }
}

impl Default for MeasurementState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MeasurementState::new();
        assert_eq!(
            state.snapshot(),
            Snapshot {
                last_distance: 0,
                measuring_enabled: false,
                hold_enabled: false,
            }
        );
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let state = MeasurementState::new();
        assert!(state.toggle_measuring());
        assert!(state.measuring_enabled());
        assert!(!state.toggle_measuring());
        assert!(!state.measuring_enabled());

        assert!(state.toggle_hold());
        assert!(state.hold_enabled());
    }

    #[test]
    fn test_flags_are_independent() {
        let state = MeasurementState::new();
        state.toggle_hold();
        assert!(!state.measuring_enabled());
        state.toggle_measuring();
        assert!(state.hold_enabled());
    }

    #[test]
    fn test_last_distance() {
        let state = MeasurementState::new();
        state.set_last_distance(123);
        assert_eq!(state.last_distance(), 123);
        state.set_last_distance(u16::MAX);
        assert_eq!(state.last_distance(), u16::MAX);
    }

    #[test]
    fn test_shared_between_threads() {
        static STATE: MeasurementState = MeasurementState::new();

        let writer = std::thread::spawn(|| {
            for distance in 0..1000 {
                STATE.set_last_distance(distance);
            }
        });
        writer.join().unwrap();
        assert_eq!(STATE.last_distance(), 999);
    }
}
