//! Mock peripherals for the task tests.

use std::collections::VecDeque;
use std::vec::Vec;

use drivers::{leds::Led, switches::Key};

use crate::{
    collaborators::{DistanceDisplay, DistanceSensor, IndicatorBank, InputSource},
    gauge::IndicatorPattern,
};

/// Returns the given distances, then repeats the last one.
pub struct MockSensor {
    readings: VecDeque<u16>,
    last: u16,
    pub reads: usize,
}

impl MockSensor {
    pub fn new<const N: usize>(readings: [u16; N]) -> Self {
        MockSensor {
            readings: readings.into(),
            last: 0,
            reads: 0,
        }
    }
}

impl DistanceSensor for MockSensor {
    async fn read_distance_cm(&mut self) -> u16 {
        self.reads += 1;
        if let Some(distance) = self.readings.pop_front() {
            self.last = distance;
        }
        self.last
    }
}

/// Remembers the last value and counts the calls.
pub struct MockDisplay {
    pub shown: Option<u16>,
    pub powered: bool,
    pub writes: usize,
    pub power_offs: usize,
}

impl Default for MockDisplay {
    fn default() -> Self {
        MockDisplay {
            shown: None,
            powered: true,
            writes: 0,
            power_offs: 0,
        }
    }
}

impl DistanceDisplay for MockDisplay {
    fn write(&mut self, value: u16) {
        self.shown = Some(value);
        self.powered = true;
        self.writes += 1;
    }

    fn power_off(&mut self) {
        self.powered = false;
        self.power_offs += 1;
    }
}

/// Returns the given keys, then no key.
pub struct MockInput {
    keys: VecDeque<Option<Key>>,
}

impl MockInput {
    pub fn new<const N: usize>(keys: [Option<Key>; N]) -> Self {
        MockInput { keys: keys.into() }
    }

    pub fn from_keys(keys: Vec<Option<Key>>) -> Self {
        MockInput { keys: keys.into() }
    }
}

impl InputSource for MockInput {
    fn poll(&mut self) -> Option<Key> {
        self.keys.pop_front().flatten()
    }
}

/// Three indicators, all off at the start.
#[derive(Default)]
pub struct MockIndicators {
    lit: [bool; 3],
    pub writes: usize,
}

impl MockIndicators {
    pub fn pattern(&self) -> IndicatorPattern {
        IndicatorPattern(self.lit)
    }
}

impl IndicatorBank for MockIndicators {
    fn set(&mut self, led: Led, on: bool) {
        self.lit[led as usize] = on;
        self.writes += 1;
    }
}
